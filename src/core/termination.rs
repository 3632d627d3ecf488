use std::future::Future;
use std::io;
use tracing::warn;

use super::acquisition::Acquisition;
use super::self_test::SelfTestReport;
use crate::plugins::traits::Channel;

/// Exit status for a run stopped by SIGINT.
pub const INTERRUPTED_EXIT: u8 = 130;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The SKU was carted, checked out and every channel notified.
    Done(Acquisition),
    /// The startup self-test reported failures; polling never started.
    SelfTestFailed { failed: Vec<Channel> },
    /// The operator pressed Ctrl-C.
    Interrupted,
}

impl Termination {
    /// `None` when the report passed and the run may go on to polling.
    pub fn from_self_test(report: &SelfTestReport) -> Option<Self> {
        if report.passed() {
            None
        } else {
            Some(Termination::SelfTestFailed {
                failed: report.failures(),
            })
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Termination::Done(_) => 0,
            Termination::SelfTestFailed { .. } => 1,
            Termination::Interrupted => INTERRUPTED_EXIT,
        }
    }
}

/// Resolve once `signal` reports an interrupt. If the handler could not be
/// installed this never resolves, so the run keeps going without Ctrl-C.
pub async fn interrupted<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("Unable to listen for Ctrl-C, continuing without it: {}", e);
        std::future::pending::<()>().await;
    }
}
