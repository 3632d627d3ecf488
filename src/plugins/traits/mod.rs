pub mod notifier;

pub use notifier::{Channel, NOTIFY_ORDER, Notifier, SELF_TEST_ORDER, in_stock_message};
