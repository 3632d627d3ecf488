pub mod acquisition;
pub mod retry;
pub mod termination;

pub use acquisition::{Acquisition, AcquisitionLoop, CycleOutcome, LoopSettings, Stage};
pub use retry::RetryPolicy;
pub use self_test::{SelfTestPolicy, SelfTestReport, run_self_test};
pub use termination::{Termination, interrupted};
