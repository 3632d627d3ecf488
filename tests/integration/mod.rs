// Shared fakes for the integration tests

pub mod acquisition_tests;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use restock_clerk::plugins::{Channel, Notifier, NotifierSet};
use restock_clerk::vendor::{IN_STOCK, InventoryStatus, VendorSession};
use restock_clerk::{AppError, Result};

pub const SKU: &str = "5438481700";
pub const TEST_SKU: &str = "5379432500";
pub const LOCALE: &str = "en_us";
pub const OUT_OF_STOCK: &str = "PRODUCT_INVENTORY_OUT_OF_STOCK";

pub type Log = Arc<Mutex<Vec<String>>>;

/// Scripted poll answer.
#[derive(Debug, Clone, Copy)]
pub enum Poll {
    InStock,
    OutOfStock,
    Fail,
}

/// Vendor session that answers from scripts and records every call.
///
/// Once a script runs dry the call succeeds (or reports in stock for polls).
pub struct FakeVendor {
    polls: Mutex<VecDeque<Poll>>,
    carts: Mutex<VecDeque<bool>>,
    checkouts: Mutex<VecDeque<bool>>,
    pub log: Log,
}

impl FakeVendor {
    pub fn new(polls: &[Poll], carts: &[bool], checkouts: &[bool]) -> Self {
        Self {
            polls: Mutex::new(polls.iter().copied().collect()),
            carts: Mutex::new(carts.iter().copied().collect()),
            checkouts: Mutex::new(checkouts.iter().copied().collect()),
            log: Log::default(),
        }
    }

    /// Handle on the call log that outlives the fake.
    pub fn log(&self) -> Log {
        Arc::clone(&self.log)
    }
}

#[async_trait]
impl VendorSession for FakeVendor {
    async fn get_inventory_status(&self, sku: &str, locale: &str) -> Result<InventoryStatus> {
        self.log.lock().unwrap().push(format!("poll:{}:{}", sku, locale));
        match self.polls.lock().unwrap().pop_front().unwrap_or(Poll::InStock) {
            Poll::InStock => Ok(InventoryStatus::new("product-77", IN_STOCK)),
            Poll::OutOfStock => Ok(InventoryStatus::new("product-77", OUT_OF_STOCK)),
            Poll::Fail => Err(AppError::vendor("poll", "connection reset")),
        }
    }

    async fn add_to_cart(&self, sku: &str, locale: &str) -> Result<()> {
        self.log.lock().unwrap().push(format!("cart:{}:{}", sku, locale));
        if self.carts.lock().unwrap().pop_front().unwrap_or(true) {
            Ok(())
        } else {
            Err(AppError::vendor("cart", "status 409"))
        }
    }

    async fn checkout(&self, locale: &str) -> Result<()> {
        self.log.lock().unwrap().push(format!("checkout:{}", locale));
        if self.checkouts.lock().unwrap().pop_front().unwrap_or(true) {
            Ok(())
        } else {
            Err(AppError::vendor("checkout", "navigation failed"))
        }
    }
}

/// Notifier that answers from a script and records `channel:product_id`.
pub struct FakeNotifier {
    channel: Channel,
    script: Mutex<VecDeque<bool>>,
    log: Log,
}

impl FakeNotifier {
    pub fn boxed(channel: Channel, script: &[bool], log: &Log) -> Box<Self> {
        Box::new(Self {
            channel,
            script: Mutex::new(script.iter().copied().collect()),
            log: Arc::clone(log),
        })
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, product_id: &str) -> Result<()> {
        self.log.lock().unwrap().push(format!("{}:{}", self.channel, product_id));
        if self.script.lock().unwrap().pop_front().unwrap_or(true) {
            Ok(())
        } else {
            Err(AppError::notification(self.channel, "scripted failure"))
        }
    }
}

/// Notifier set with one fake per listed channel.
pub fn fake_notifiers(channels: &[(Channel, Vec<bool>)], log: &Log) -> NotifierSet {
    let mut set = NotifierSet::new();
    for (channel, script) in channels {
        set.register(FakeNotifier::boxed(*channel, script, log));
    }
    set
}
