pub mod bounded;
pub mod http_fetcher;
pub mod parallel;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::app::Result;

pub use bounded::BoundedFetcher;
pub use http_fetcher::HttpFetcher;
pub use parallel::{run, run_with, ParallelFetcher};

/// One HTTP GET against a shared client.
///
/// Implementations return the raw body of a 2xx response. A non-2xx response
/// is `FanfetchError::Status`; failures before a response arrives are
/// transport errors. See [`FanfetchError::kind`](crate::app::FanfetchError::kind).
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// Release the underlying client. Called once at the end of a run.
    fn close(&self) {}
}

/// Closes a [`Fetcher`] when dropped, so the client is released on every
/// exit path of a run, including unwinding.
pub struct CloseGuard<'a> {
    fetcher: &'a (dyn Fetcher + Send + Sync),
}

impl<'a> CloseGuard<'a> {
    pub fn new(fetcher: &'a (dyn Fetcher + Send + Sync)) -> Self {
        Self { fetcher }
    }
}

impl Drop for CloseGuard<'_> {
    fn drop(&mut self) {
        self.fetcher.close();
    }
}
