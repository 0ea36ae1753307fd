pub mod failure;
pub mod outcome;

pub use failure::FailureKind;
pub use outcome::{FetchReport, FetchResult, RunOutcome};
