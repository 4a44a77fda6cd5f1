pub mod models;
pub mod orchestrator;
pub mod paths;

pub use models::{BatchReport, SkipReason, TransferOutcome, TransferRecord};
pub use orchestrator::{BatchState, run, run_batch};
