use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use validator::Validate;

use crate::plugins::traits::Channel;
use crate::regions;
use crate::utils::error::{AppError, Result};

/// Credentials file looked up when `--credentials` is not given.
pub const DEFAULT_CREDENTIALS_FILE: &str = "clerk";

/// Prefix for credential environment variables, e.g. `CLERK__TWILIO__TOKEN`.
pub const ENV_PREFIX: &str = "CLERK";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SmsConfig {
    #[validate(length(min = 1))]
    pub account_sid: String,
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 1))]
    pub source_number: String,
    #[validate(length(min = 1))]
    pub destination_number: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiscordConfig {
    #[validate(url)]
    pub webhook_url: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TwitterConfig {
    /// OAuth 2.0 user-context access token with `tweet.write` scope.
    #[validate(length(min = 1))]
    pub bearer_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TelegramConfig {
    #[validate(length(min = 1))]
    pub api_key: String,
    #[validate(length(min = 1))]
    pub chat_id: String,
}

/// Credential sources (file and environment), kept unparsed. A block is only
/// deserialized once its channel is enabled, so a stray or half-filled block
/// for a disabled channel never fails the run.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    source: Config,
}

impl Credentials {
    pub fn load(path: &str) -> Result<Self> {
        let source = Config::builder()
            // Optional credentials file, any format the config crate knows
            .add_source(File::with_name(path).required(false))
            // Environment variables override the file
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(Self::from(source))
    }

    /// The `section` block, or `None` if no source defines it.
    pub fn section<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>> {
        match self.source.get::<T>(section) {
            Ok(block) => Ok(Some(block)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(AppError::Validation(format!("Invalid {} credentials: {}", section, e))),
        }
    }
}

impl From<Config> for Credentials {
    fn from(source: Config) -> Self {
        Self { source }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSelection {
    pub sms: bool,
    pub discord: bool,
    pub twitter: bool,
    pub telegram: bool,
}

impl ChannelSelection {
    pub fn is_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Sms => self.sms,
            Channel::Discord => self.discord,
            Channel::Twitter => self.twitter,
            Channel::Telegram => self.telegram,
        }
    }

    pub fn any(&self) -> bool {
        self.sms || self.discord || self.twitter || self.telegram
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrowserConfig {
    pub headless: bool,
    pub chrome_path: Option<String>,
}

/// Operator input, before it is checked against the region table and the
/// available credentials.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub region: String,
    pub channels: ChannelSelection,
    pub delay_ms: u64,
    pub retry_interval_ms: u64,
    pub sku: Option<String>,
    pub test_sku: Option<String>,
    pub browser: BrowserConfig,
}

impl Default for ResolveRequest {
    fn default() -> Self {
        Self {
            region: regions::DEFAULT_REGION.to_string(),
            channels: ChannelSelection::default(),
            delay_ms: 60001,
            retry_interval_ms: 0,
            sku: None,
            test_sku: None,
            browser: BrowserConfig::default(),
        }
    }
}

/// Fully resolved, immutable settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub region: String,
    pub sku: String,
    pub test_sku: String,
    pub locale: String,
    pub currency: String,
    pub delay: Duration,
    pub retry_interval: Duration,
    pub browser: BrowserConfig,
    pub sms: Option<SmsConfig>,
    pub discord: Option<DiscordConfig>,
    pub twitter: Option<TwitterConfig>,
    pub telegram: Option<TelegramConfig>,
}

impl RunConfig {
    pub fn resolve(request: &ResolveRequest, credentials: &Credentials) -> Result<Self> {
        let region = regions::lookup(&request.region).ok_or_else(|| {
            ConfigError::Message(format!(
                "Unknown region '{}', expected one of: {}",
                request.region,
                regions::codes().join(", ")
            ))
        })?;

        let channels = request.channels;
        let config = RunConfig {
            region: region.code.to_string(),
            sku: request.sku.clone().unwrap_or_else(|| region.sku.to_string()),
            test_sku: request
                .test_sku
                .clone()
                .unwrap_or_else(|| region.test_sku.to_string()),
            locale: region.locale.to_string(),
            currency: region.currency.to_string(),
            delay: Duration::from_millis(request.delay_ms),
            retry_interval: Duration::from_millis(request.retry_interval_ms),
            browser: request.browser.clone(),
            sms: require(channels.sms, credentials, "twilio", "--sms")?,
            discord: require(channels.discord, credentials, "discord", "--discord")?,
            twitter: require(channels.twitter, credentials, "twitter", "--twitter")?,
            telegram: require(channels.telegram, credentials, "telegram", "--telegram")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delay.is_zero() {
            return Err(ConfigError::Message("Delay must be greater than 0".into()).into());
        }

        if self.sku.trim().is_empty() {
            return Err(ConfigError::Message("SKU must not be empty".into()).into());
        }

        if self.test_sku.trim().is_empty() {
            return Err(ConfigError::Message("Test SKU must not be empty".into()).into());
        }

        if let Some(discord) = &self.discord {
            if !discord.webhook_url.starts_with("https://discord.com/api/webhooks/") {
                let message = "Invalid Discord webhook URL format";
                return Err(ConfigError::Message(message.into()).into());
            }
        }

        Ok(())
    }
}

fn require<T: DeserializeOwned + Validate>(
    enabled: bool,
    credentials: &Credentials,
    section: &str,
    flag: &str,
) -> Result<Option<T>> {
    if !enabled {
        return Ok(None);
    }

    let block: T = credentials.section(section)?.ok_or_else(|| {
        ConfigError::Message(format!(
            "{} requires a [{}] credentials block (or {}__{}__* environment variables)",
            flag,
            section,
            ENV_PREFIX,
            section.to_uppercase()
        ))
    })?;

    block
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid {} credentials: {}", section, e)))?;

    Ok(Some(block))
}
