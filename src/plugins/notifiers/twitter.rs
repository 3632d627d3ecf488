use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::config::TwitterConfig;
use crate::plugins::traits::{Channel, Notifier, in_stock_message};
use crate::utils::error::AppError;
use crate::Result;

const TWITTER_API_BASE: &str = "https://api.twitter.com";

/// Posts a tweet with a user-context OAuth 2.0 token.
pub struct TwitterNotifier {
    config: TwitterConfig,
    client: Client,
    api_base: String,
}

impl TwitterNotifier {
    pub fn new(config: TwitterConfig, client: Client) -> Self {
        Self::with_base_url(config, client, TWITTER_API_BASE)
    }

    pub fn with_base_url(
        config: TwitterConfig,
        client: Client,
        api_base: impl Into<String>,
    ) -> Self {
        TwitterNotifier {
            config,
            client,
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl Notifier for TwitterNotifier {
    fn channel(&self) -> Channel {
        Channel::Twitter
    }

    async fn send(&self, product_id: &str) -> Result<()> {
        let url = format!("{}/2/tweets", self.api_base.trim_end_matches('/'));

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.bearer_token)
            .json(&json!({ "text": in_stock_message(product_id) }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notification(
                Channel::Twitter,
                format!("tweet rejected with status {}", status),
            ));
        }

        Ok(())
    }
}
