use async_trait::async_trait;
use reqwest::Client;

use crate::config::SmsConfig;
use crate::plugins::traits::{Channel, Notifier, in_stock_message};
use crate::utils::error::AppError;
use crate::Result;

const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Sends a text message through Twilio's Messages resource.
pub struct SmsNotifier {
    config: SmsConfig,
    client: Client,
    api_base: String,
}

impl SmsNotifier {
    pub fn new(config: SmsConfig, client: Client) -> Self {
        Self::with_base_url(config, client, TWILIO_API_BASE)
    }

    pub fn with_base_url(config: SmsConfig, client: Client, api_base: impl Into<String>) -> Self {
        SmsNotifier {
            config,
            client,
            api_base: api_base.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    async fn send(&self, product_id: &str) -> Result<()> {
        let body = in_stock_message(product_id);
        let form = [
            ("To", self.config.destination_number.as_str()),
            ("From", self.config.source_number.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoint())
            .basic_auth(&self.config.account_sid, Some(&self.config.token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notification(
                Channel::Sms,
                format!("Twilio responded with status {}", status),
            ));
        }

        Ok(())
    }
}
