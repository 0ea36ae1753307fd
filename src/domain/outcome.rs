use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Result of fetching one URL. `None` marks a failed fetch; a successful
/// fetch of the JSON document `null` is `Some(Value::Null)`.
pub type FetchResult = Option<Value>;

/// Ordered results of one run, one entry per requested URL.
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub retrieved_at: DateTime<Utc>,
    pub successes: usize,
    pub results: Vec<FetchResult>,
}

impl FetchReport {
    pub fn new(retrieved_at: DateTime<Utc>, results: Vec<FetchResult>, successes: usize) -> Self {
        Self {
            retrieved_at,
            successes,
            results,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.results.len().saturating_sub(self.successes)
    }

    /// Payloads that were actually fetched, in input order.
    pub fn payloads(&self) -> impl Iterator<Item = &Value> {
        self.results.iter().flatten()
    }
}

/// What a run hands back to its caller.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// At least one payload was fetched, or there was nothing to fetch.
    Data(FetchReport),
    /// URLs were requested but every one of them failed.
    NoData { attempted: usize },
}

impl RunOutcome {
    pub fn from_report(report: FetchReport) -> Self {
        if !report.is_empty() && report.successes == 0 {
            RunOutcome::NoData {
                attempted: report.len(),
            }
        } else {
            RunOutcome::Data(report)
        }
    }

    pub fn successes(&self) -> usize {
        match self {
            RunOutcome::Data(report) => report.successes,
            RunOutcome::NoData { .. } => 0,
        }
    }

    pub fn report(&self) -> Option<&FetchReport> {
        match self {
            RunOutcome::Data(report) => Some(report),
            RunOutcome::NoData { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<FetchReport> {
        match self {
            RunOutcome::Data(report) => Some(report),
            RunOutcome::NoData { .. } => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, RunOutcome::NoData { .. })
    }
}
