pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, RetryMode};

#[derive(Parser)]
#[command(name = "fanfetch")]
#[command(about = "Fetch JSON from many URLs with bounded concurrency", long_about = None)]
pub struct Cli {
    /// Maximum number of requests in flight [default: 10]
    #[arg(short, long, global = true)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Pause after each successful fetch, in milliseconds [default: 1000]
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Keep the response of the retry that follows a transport failure
    #[arg(long, global = true)]
    pub use_retry_result: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch JSON documents and print them as one report
    Fetch {
        /// URLs to fetch, in order
        urls: Vec<String>,

        /// Read URLs from a file, one per line (`#` starts a comment)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Apply command-line flags on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(concurrency) = self.concurrency {
            config.fetch.concurrency = concurrency;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.fetch.timeout_secs = timeout_secs;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.fetch.pacing_delay_ms = delay_ms;
        }
        if self.use_retry_result {
            config.fetch.retry_mode = RetryMode::UseResult;
        }
    }
}
