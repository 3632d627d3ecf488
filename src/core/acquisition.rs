//! The acquisition loop: poll until the SKU is in stock, cart it, check out,
//! tell the operator, stop.
//!
//! Every failure is treated as transient. A failed step sends the loop back
//! to polling after the [`RetryPolicy`] pause; only a not-in-stock answer
//! waits the full poll delay. Nothing is remembered between cycles, so a
//! failed notification means the next in-stock cycle carts, checks out and
//! notifies again (at-least-once delivery).

use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::retry::RetryPolicy;
use crate::config::RunConfig;
use crate::plugins::traits::{Channel, NOTIFY_ORDER};
use crate::plugins::NotifierSet;
use crate::utils::error::AppError;
use crate::vendor::VendorSession;

/// Step of a cycle that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Poll,
    Cart,
    Checkout,
    Notify(Channel),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Poll => f.write_str("poll"),
            Stage::Cart => f.write_str("cart"),
            Stage::Checkout => f.write_str("checkout"),
            Stage::Notify(channel) => write!(f, "notify:{}", channel),
        }
    }
}

/// Result of one poll → purchase → notify pass.
#[derive(Debug)]
pub enum CycleOutcome {
    NotInStock,
    Retry { stage: Stage, error: AppError },
    Completed { product_id: String },
}

/// Successful end of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquisition {
    pub product_id: String,
    pub cycles: u64,
    pub retries: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSettings {
    pub sku: String,
    pub locale: String,
    pub poll_delay: Duration,
    pub retry: RetryPolicy,
}

impl LoopSettings {
    /// Settings for the live SKU of `config`.
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            sku: config.sku.clone(),
            locale: config.locale.clone(),
            poll_delay: config.delay,
            retry: RetryPolicy::from_interval(config.retry_interval),
        }
    }
}

pub struct AcquisitionLoop<V> {
    vendor: V,
    notifiers: NotifierSet,
    settings: LoopSettings,
}

impl<V: VendorSession> AcquisitionLoop<V> {
    pub fn new(vendor: V, notifiers: NotifierSet, settings: LoopSettings) -> Self {
        Self {
            vendor,
            notifiers,
            settings,
        }
    }

    /// Run cycles until one completes. Never returns otherwise.
    pub async fn run(&self) -> Acquisition {
        let mut cycles = 0u64;
        let mut retries = 0u64;

        info!(
            "Watching SKU {} ({}), polling every {:?}",
            self.settings.sku, self.settings.locale, self.settings.poll_delay
        );

        loop {
            cycles += 1;

            match self.run_cycle().await {
                CycleOutcome::Completed { product_id } => {
                    info!("Product {} carted, checked out and notified", product_id);
                    return Acquisition {
                        product_id,
                        cycles,
                        retries,
                    };
                }
                CycleOutcome::NotInStock => {
                    tokio::time::sleep(self.settings.poll_delay).await;
                }
                CycleOutcome::Retry { stage, error } => {
                    retries += 1;
                    warn!("Error during {} retrying...: {}", stage, error);
                    self.settings.retry.pause().await;
                }
            }
        }
    }

    /// One pass through poll, cart, checkout and notify.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let LoopSettings { sku, locale, .. } = &self.settings;

        let status = match self.vendor.get_inventory_status(sku, locale).await {
            Ok(status) => status,
            Err(error) => return CycleOutcome::Retry { stage: Stage::Poll, error },
        };

        info!("Product ID: {}", status.product_id);
        info!("Product Status: {}", status.status);

        if !status.is_in_stock() {
            return CycleOutcome::NotInStock;
        }

        if let Err(error) = self.vendor.add_to_cart(sku, locale).await {
            return CycleOutcome::Retry { stage: Stage::Cart, error };
        }
        debug!("SKU {} added to cart", sku);

        if let Err(error) = self.vendor.checkout(locale).await {
            return CycleOutcome::Retry { stage: Stage::Checkout, error };
        }
        info!("Checkout opened for product {}", status.product_id);

        for notifier in self.notifiers.in_order(&NOTIFY_ORDER) {
            let channel = notifier.channel();
            if let Err(error) = notifier.send(&status.product_id).await {
                return CycleOutcome::Retry {
                    stage: Stage::Notify(channel),
                    error,
                };
            }
            info!("{} notification sent", channel.label());
        }

        CycleOutcome::Completed {
            product_id: status.product_id,
        }
    }
}
