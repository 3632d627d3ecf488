use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::config::DiscordConfig;
use crate::plugins::traits::{Channel, Notifier};
use crate::utils::error::AppError;
use crate::Result;

const EMBED_COLOR: u32 = 0x76b900;
const DEFAULT_USERNAME: &str = "Restock Clerk";

pub struct DiscordNotifier {
    config: DiscordConfig,
    client: Client,
}

impl DiscordNotifier {
    pub fn new(config: DiscordConfig, client: Client) -> Self {
        DiscordNotifier { config, client }
    }

    fn create_embed(&self, product_id: &str) -> serde_json::Value {
        json!({
            "title": "🛒 In stock and carted",
            "description": "Finish checkout in the open browser window.",
            "color": EMBED_COLOR,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "fields": [
                {
                    "name": "Product ID",
                    "value": product_id,
                    "inline": true
                }
            ],
            "footer": {
                "text": DEFAULT_USERNAME
            }
        })
    }

    fn create_webhook_payload(&self, product_id: &str) -> serde_json::Value {
        let username = self.config.username.as_deref().unwrap_or(DEFAULT_USERNAME);
        json!({
            "username": username,
            "content": crate::plugins::traits::in_stock_message(product_id),
            "embeds": [self.create_embed(product_id)]
        })
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    fn channel(&self) -> Channel {
        Channel::Discord
    }

    async fn send(&self, product_id: &str) -> Result<()> {
        let payload = self.create_webhook_payload(product_id);

        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notification(
                Channel::Discord,
                format!("webhook responded with status {}", status),
            ));
        }

        Ok(())
    }
}
