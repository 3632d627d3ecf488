use reqwest::Client;
use std::time::Duration;
use tokio::time::Instant;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restock_clerk::config::{DiscordConfig, TelegramConfig};
use restock_clerk::core::{AcquisitionLoop, LoopSettings, RetryPolicy};
use restock_clerk::plugins::notifiers::{DiscordNotifier, TelegramNotifier};
use restock_clerk::plugins::{Channel, NotifierSet};

use super::*;

fn settings(poll_delay_ms: u64) -> LoopSettings {
    LoopSettings {
        sku: SKU.to_string(),
        locale: LOCALE.to_string(),
        poll_delay: Duration::from_millis(poll_delay_ms),
        retry: RetryPolicy::Immediate,
    }
}

#[tokio::test(start_paused = true)]
async fn test_out_of_stock_polls_at_configured_delay() {
    let vendor = FakeVendor::new(&[Poll::OutOfStock, Poll::OutOfStock, Poll::InStock], &[], &[]);
    let log = vendor.log();

    let acquisition = AcquisitionLoop::new(vendor, NotifierSet::new(), settings(60001));
    let start = Instant::now();
    let result = acquisition.run().await;

    assert_eq!(start.elapsed(), Duration::from_millis(2 * 60001));
    assert_eq!(result.product_id, "product-77");

    let calls = log.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            "poll:5438481700:en_us",
            "poll:5438481700:en_us",
            "poll:5438481700:en_us",
            "cart:5438481700:en_us",
            "checkout:en_us",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_at_every_stage_return_to_polling() {
    let vendor = FakeVendor::new(
        &[Poll::Fail, Poll::InStock, Poll::InStock, Poll::InStock, Poll::InStock],
        &[false, true, true, true],
        &[false, true, true],
    );
    let log = vendor.log();
    let notify_log = Log::default();
    let notifiers = fake_notifiers(&[(Channel::Discord, vec![false, true])], &notify_log);

    let acquisition = AcquisitionLoop::new(vendor, notifiers, settings(60001));
    let start = Instant::now();
    let result = acquisition.run().await;

    // Poll, cart, checkout and notify each failed once; none of them slept
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(result.retries, 4);
    assert_eq!(result.cycles, 5);

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.iter().filter(|c| c.starts_with("poll:")).count(), 5);
    assert_eq!(calls.iter().filter(|c| c.starts_with("cart:")).count(), 4);
    assert_eq!(calls.iter().filter(|c| c.starts_with("checkout:")).count(), 3);
    assert_eq!(calls.last().map(String::as_str), Some("checkout:en_us"));
    assert_eq!(notify_log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_notification_failure_repolls_same_sku() {
    let vendor = FakeVendor::new(&[Poll::InStock, Poll::InStock], &[], &[]);
    let log = vendor.log();
    let notify_log = Log::default();
    let notifiers = fake_notifiers(
        &[(Channel::Sms, vec![]), (Channel::Telegram, vec![false, true])],
        &notify_log,
    );

    let acquisition = AcquisitionLoop::new(vendor, notifiers, settings(1000));
    acquisition.run().await;

    let calls = log.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            "poll:5438481700:en_us",
            "cart:5438481700:en_us",
            "checkout:en_us",
            "poll:5438481700:en_us",
            "cart:5438481700:en_us",
            "checkout:en_us",
        ]
    );

    // SMS went out on both passes
    assert_eq!(
        notify_log.lock().unwrap().clone(),
        vec!["sms:product-77", "telegram:product-77", "sms:product-77", "telegram:product-77"]
    );
}

#[tokio::test]
async fn test_only_enabled_channels_in_fixed_order() {
    let vendor = FakeVendor::new(&[], &[], &[]);
    let notify_log = Log::default();
    let notifiers = fake_notifiers(
        &[(Channel::Telegram, vec![]), (Channel::Discord, vec![]), (Channel::Sms, vec![])],
        &notify_log,
    );

    let acquisition = AcquisitionLoop::new(vendor, notifiers, settings(1000));
    acquisition.run().await;

    assert_eq!(
        notify_log.lock().unwrap().clone(),
        vec!["sms:product-77", "discord:product-77", "telegram:product-77"]
    );
}

#[tokio::test]
async fn test_end_to_end_with_http_senders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/webhooks/1/token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    // Telegram is down for the first pass only
    Mock::given(method("POST"))
        .and(path("/bot42:key/sendMessage"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bot42:key/sendMessage"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = Client::new();
    let mut notifiers = NotifierSet::new();
    notifiers.register(Box::new(DiscordNotifier::new(
        DiscordConfig {
            webhook_url: format!("{}/api/webhooks/1/token", server.uri()),
            username: None,
        },
        client.clone(),
    )));
    notifiers.register(Box::new(TelegramNotifier::with_base_url(
        TelegramConfig {
            api_key: "42:key".to_string(),
            chat_id: "1001".to_string(),
        },
        client,
        server.uri(),
    )));

    let vendor = FakeVendor::new(&[Poll::OutOfStock, Poll::InStock, Poll::InStock], &[], &[]);
    let log = vendor.log();

    let acquisition = AcquisitionLoop::new(vendor, notifiers, settings(1));
    let result = acquisition.run().await;

    assert_eq!(result.product_id, "product-77");
    assert_eq!(result.retries, 1);
    assert_eq!(log.lock().unwrap().iter().filter(|c| c.starts_with("checkout:")).count(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}
