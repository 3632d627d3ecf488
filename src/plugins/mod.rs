pub mod traits;
pub mod manager;
pub mod notifiers;

pub use manager::NotifierSet;
pub use traits::{Channel, Notifier};
