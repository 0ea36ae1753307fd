use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

use crate::app::{FanfetchError, Result};
use crate::config::{FetchConfig, RetryMode};
use crate::domain::FetchResult;
use crate::fetcher::Fetcher;

/// Admission-controlled JSON fetcher shared by every task of a run.
///
/// At most `concurrency` calls to [`fetch_json`](Self::fetch_json) hold a
/// permit at once. The permit covers the request, the optional retry and
/// the pacing delay after a success.
pub struct BoundedFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    semaphore: Semaphore,
    successes: AtomicUsize,
    capacity: usize,
    pacing_delay: Duration,
    retry_mode: RetryMode,
}

impl BoundedFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &FetchConfig) -> Self {
        // A zero-permit gate would park every task forever.
        let capacity = config.concurrency.max(1);
        Self {
            fetcher,
            semaphore: Semaphore::new(capacity),
            successes: AtomicUsize::new(0),
            capacity,
            pacing_delay: config.pacing_delay(),
            retry_mode: config.retry_mode,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits currently free. Equals `capacity()` when nothing is in flight.
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Number of fetches that produced a payload so far.
    pub fn successes(&self) -> usize {
        self.successes.load(Ordering::Relaxed)
    }

    /// Fetch `url` and decode it as JSON. Failures are logged and become `None`.
    pub async fn fetch_json(&self, url: &str) -> FetchResult {
        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                error!("Unexpected error fetching data from {}: {}", url, e);
                return None;
            }
        };

        match self.attempt(url).await {
            Ok(value) => Some(self.record_success(url, value)),
            Err(e) => {
                let kind = e.kind();
                error!("{} fetching data from {}: {}", kind, url, e);
                if kind.is_retryable() {
                    self.retry(url).await
                } else {
                    None
                }
            }
        }
    }

    async fn retry(&self, url: &str) -> FetchResult {
        match self.retry_mode {
            // Bare GET: no pacing delay and no decoding, since the body is dropped.
            RetryMode::Discard => {
                match self.fetcher.fetch(url).await {
                    Ok(_) => debug!("Retry of {} succeeded; result discarded", url),
                    Err(e) => debug!("Retry of {} failed: {}", url, e),
                }
                None
            }
            RetryMode::UseResult => match self.attempt(url).await {
                Ok(value) => Some(self.record_success(url, value)),
                Err(e) => {
                    error!("{} fetching data from {} on retry: {}", e.kind(), url, e);
                    None
                }
            },
        }
    }

    /// One GET, pacing delay after a 2xx, then JSON decoding.
    async fn attempt(&self, url: &str) -> Result<Value> {
        let body = self.fetcher.fetch(url).await?;

        if !self.pacing_delay.is_zero() {
            tokio::time::sleep(self.pacing_delay).await;
        }

        serde_json::from_slice(&body).map_err(FanfetchError::from)
    }

    fn record_success(&self, url: &str, value: Value) -> Value {
        info!("Fetched data from {}", url);
        self.successes.fetch_add(1, Ordering::Relaxed);
        value
    }
}
