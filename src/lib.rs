//! # Fanfetch
//!
//! Fetches JSON documents from a list of URLs with a fixed cap on requests in
//! flight, one retry for transport failures, and results returned in input order.
//!
//! ## Architecture
//!
//! ```text
//! URLs → ParallelFetcher → BoundedFetcher (gate, retry) → Fetcher (HTTP) → RunOutcome
//! ```
//!
//! - [`fetcher`]: admission-controlled fetching and the fan-out/fan-in runner
//! - [`domain`]: results, reports and the failure taxonomy
//! - [`config`]: tunables with defaults, optionally loaded from TOML
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch two pages, at most 4 requests at a time
//! fanfetch fetch -c 4 https://api.example.com/items?page=1 https://api.example.com/items?page=2
//!
//! # Read URLs from a file and write the report to disk
//! fanfetch fetch --file urls.txt --output report.json --pretty
//! ```
//!
//! ## Library use
//!
//! ```rust,ignore
//! use fanfetch::config::FetchConfig;
//! use fanfetch::domain::RunOutcome;
//!
//! let outcome = fanfetch::fetcher::run(urls, &FetchConfig::with_concurrency(5)).await?;
//! match outcome {
//!     RunOutcome::Data(report) => println!("{} of {} fetched", report.successes, report.len()),
//!     RunOutcome::NoData { attempted } => eprintln!("all {} URLs failed", attempted),
//! }
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the configuration to a
/// shared HTTP transport.
pub mod app;

/// Configuration with defaults; `--config` loads overrides from TOML.
pub mod config;

/// Command-line interface using clap.
///
/// - `fetch [URLS]... [--file] [--output]` - Fetch and print a JSON report
/// - `config` - Print the effective configuration
pub mod cli;

/// Core domain types.
///
/// - [`FetchResult`](domain::FetchResult): payload or absence for one URL
/// - [`FetchReport`](domain::FetchReport): ordered results plus success count
/// - [`RunOutcome`](domain::RunOutcome): report, or the "no data" sentinel
/// - [`FailureKind`](domain::FailureKind): how a fetch failed
pub mod domain;

/// Bounded, retrying JSON fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for a single HTTP GET
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`BoundedFetcher`](fetcher::bounded::BoundedFetcher): Semaphore gate, retry policy, success counter
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): Order-preserving concurrent fetching
pub mod fetcher;
