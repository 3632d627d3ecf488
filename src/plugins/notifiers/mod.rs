// Notifier implementations
pub mod sms;
pub mod twitter;
pub mod discord;
pub mod telegram;

pub use sms::SmsNotifier;
pub use twitter::TwitterNotifier;
pub use discord::DiscordNotifier;
pub use telegram::TelegramNotifier;
