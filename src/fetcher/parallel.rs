use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;

use crate::app::Result;
use crate::config::FetchConfig;
use crate::domain::{FetchReport, FetchResult, RunOutcome};
use crate::fetcher::{BoundedFetcher, CloseGuard, Fetcher, HttpFetcher};

pub struct ParallelFetcher {
    fetcher: Arc<BoundedFetcher>,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_config(fetcher, &FetchConfig::default())
    }

    pub fn with_config(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &FetchConfig) -> Self {
        Self {
            fetcher: Arc::new(BoundedFetcher::new(fetcher, config)),
        }
    }

    pub fn bounded(&self) -> &BoundedFetcher {
        &self.fetcher
    }

    /// Fetch every URL concurrently and return the results in input order.
    ///
    /// All tasks are spawned up front; the admission gate inside
    /// [`BoundedFetcher`] decides how many run at once. The success count is
    /// read from the shared counter, so calls on one `ParallelFetcher` must
    /// not overlap.
    pub async fn fetch_all(&self, urls: Vec<String>) -> FetchReport {
        let retrieved_at = Utc::now();
        let total = urls.len();
        let baseline = self.fetcher.successes();

        let mut handles = Vec::with_capacity(total);
        let mut spawned_urls = Vec::with_capacity(total);

        for url in urls {
            let fetcher = self.fetcher.clone();
            let task_url = url.clone();
            handles.push(tokio::spawn(async move {
                fetcher.fetch_json(&task_url).await
            }));
            spawned_urls.push(url);
        }

        // join_all yields in handle order, which is input order.
        let results: Vec<FetchResult> = join_all(handles)
            .await
            .into_iter()
            .zip(spawned_urls.iter())
            .map(|(joined, url)| match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Unexpected error fetching data from {}: {}", url, e);
                    None
                }
            })
            .collect();

        let successes = self.fetcher.successes() - baseline;
        tracing::info!(
            "Successfully fetched data for {} of {} URLs",
            successes,
            total
        );

        FetchReport::new(retrieved_at, results, successes)
    }
}

/// Fetch `urls` with a fresh reqwest client built from `config`.
///
/// Returns `Err` only if the configuration is invalid or the client cannot be
/// built; failed fetches show up as absent results instead.
pub async fn run(urls: Vec<String>, config: &FetchConfig) -> Result<RunOutcome> {
    config.validate()?;
    let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(config)?);
    Ok(run_with(fetcher, urls, config).await)
}

/// Run one fan-out/fan-in pass over `urls` and close `fetcher` afterwards.
pub async fn run_with(
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    urls: Vec<String>,
    config: &FetchConfig,
) -> RunOutcome {
    let _close = CloseGuard::new(fetcher.as_ref());

    let parallel = ParallelFetcher::with_config(fetcher.clone(), config);
    let report = parallel.fetch_all(urls).await;

    let outcome = RunOutcome::from_report(report);
    if let RunOutcome::NoData { attempted } = outcome {
        tracing::error!("No data fetched from the URLs ({} attempted)", attempted);
    }
    outcome
}
