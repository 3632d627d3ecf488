use std::time::Duration;

/// What the acquisition loop does between a failed step and the next poll.
///
/// The interval never grows: a retry is either immediate or waits a fixed
/// floor interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Re-poll right away. The task still yields so signals are observed.
    #[default]
    Immediate,
    /// Wait this long before re-polling.
    FixedInterval(Duration),
}

impl RetryPolicy {
    pub fn from_interval(interval: Duration) -> Self {
        if interval.is_zero() {
            RetryPolicy::Immediate
        } else {
            RetryPolicy::FixedInterval(interval)
        }
    }

    pub async fn pause(&self) {
        match self {
            RetryPolicy::Immediate => tokio::task::yield_now().await,
            RetryPolicy::FixedInterval(interval) => tokio::time::sleep(*interval).await,
        }
    }
}
