use async_trait::async_trait;
use std::fmt;

use crate::Result;

/// An outbound notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Sms,
    Twitter,
    Discord,
    Telegram,
}

/// Order in which channels are notified after a successful checkout.
pub const NOTIFY_ORDER: [Channel; 4] = [
    Channel::Sms,
    Channel::Twitter,
    Channel::Discord,
    Channel::Telegram,
];

/// Order in which channels are exercised by the startup self-test.
pub const SELF_TEST_ORDER: [Channel; 4] = [
    Channel::Sms,
    Channel::Discord,
    Channel::Twitter,
    Channel::Telegram,
];

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Twitter => "twitter",
            Channel::Discord => "discord",
            Channel::Telegram => "telegram",
        }
    }

    /// Human readable name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::Twitter => "Twitter",
            Channel::Discord => "Discord",
            Channel::Telegram => "Telegram",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text sent to every channel once a product has been carted.
pub fn in_stock_message(product_id: &str) -> String {
    format!(
        "{} is in stock and was added to the cart. Finish checkout now.",
        product_id
    )
}

/// A single-shot notification sender.
///
/// Implementations make exactly one outbound call per `send` and keep no
/// state between calls; retrying is the caller's business.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn channel(&self) -> Channel;

    async fn send(&self, product_id: &str) -> Result<()>;
}
