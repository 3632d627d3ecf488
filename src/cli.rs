use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{BrowserConfig, ChannelSelection, DEFAULT_CREDENTIALS_FILE, ResolveRequest};
use crate::core::SelfTestPolicy;
use crate::regions::DEFAULT_REGION;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "restock-clerk",
    version,
    about = "Buy a scarce SKU the moment it comes back in stock"
)]
pub struct Cli {
    /// 3 letter region code
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Enable Twitter posts whenever the SKU is in stock
    #[arg(long)]
    pub twitter: bool,

    /// Enable SMS notifications whenever the SKU is in stock
    #[arg(long)]
    pub sms: bool,

    /// Enable Discord webhook notifications whenever the SKU is in stock
    #[arg(long)]
    pub discord: bool,

    /// Enable Telegram bot notifications whenever the SKU is in stock
    #[arg(long)]
    pub telegram: bool,

    /// Test every enabled notification channel before polling
    #[arg(long)]
    pub test: bool,

    /// Delay between inventory refreshes in ms
    #[arg(long, default_value_t = 60001)]
    pub delay: u64,

    /// Minimum wait in ms before retrying after a failed step (0 retries immediately)
    #[arg(long, default_value_t = 0)]
    pub retry_interval: u64,

    /// How the self-test reacts to a failing channel
    #[arg(long, value_enum, default_value_t = PolicyArg::PerChannel)]
    pub self_test_policy: PolicyArg,

    /// Override the region's target SKU
    #[arg(long)]
    pub sku: Option<String>,

    /// Override the region's self-test SKU
    #[arg(long)]
    pub test_sku: Option<String>,

    /// Hide the browser window
    #[arg(long)]
    pub headless: bool,

    /// Path to the Chrome/Chromium binary
    #[arg(long, env = "CHROME_PATH")]
    pub chrome_path: Option<String>,

    /// Credentials file (extension optional)
    #[arg(long, default_value = DEFAULT_CREDENTIALS_FILE)]
    pub credentials: String,

    /// Also write logs to daily files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    PerChannel,
    DeferAll,
    AbortOnFirst,
}

impl From<PolicyArg> for SelfTestPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PerChannel => SelfTestPolicy::PerChannel,
            PolicyArg::DeferAll => SelfTestPolicy::DeferAll,
            PolicyArg::AbortOnFirst => SelfTestPolicy::AbortOnFirst,
        }
    }
}

impl Cli {
    pub fn channels(&self) -> ChannelSelection {
        ChannelSelection {
            sms: self.sms,
            discord: self.discord,
            twitter: self.twitter,
            telegram: self.telegram,
        }
    }

    pub fn resolve_request(&self) -> ResolveRequest {
        ResolveRequest {
            region: self.region.clone(),
            channels: self.channels(),
            delay_ms: self.delay,
            retry_interval_ms: self.retry_interval,
            sku: self.sku.clone(),
            test_sku: self.test_sku.clone(),
            browser: BrowserConfig {
                headless: self.headless,
                chrome_path: self.chrome_path.clone(),
            },
        }
    }
}
