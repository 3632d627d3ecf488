use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::config::TelegramConfig;
use crate::plugins::traits::{Channel, Notifier, in_stock_message};
use crate::utils::error::AppError;
use crate::Result;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Sends a bot message through `POST /bot<token>/sendMessage`.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
    api_base: String,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig, client: Client) -> Self {
        Self::with_base_url(config, client, TELEGRAM_API_BASE)
    }

    pub fn with_base_url(
        config: TelegramConfig,
        client: Client,
        api_base: impl Into<String>,
    ) -> Self {
        TelegramNotifier {
            config,
            client,
            api_base: api_base.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.config.api_key
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn channel(&self) -> Channel {
        Channel::Telegram
    }

    async fn send(&self, product_id: &str) -> Result<()> {
        let payload = json!({
            "chat_id": self.config.chat_id,
            "text": in_stock_message(product_id),
        });

        let response = self.client.post(self.endpoint()).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notification(
                Channel::Telegram,
                format!("bot API responded with status {}", status),
            ));
        }

        Ok(())
    }
}
