use std::fs;
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::domain::{FetchReport, RunOutcome};
use crate::fetcher::run_with;

/// Fetch every URL and emit the report. Returns the run outcome so the caller
/// can decide how to exit when nothing was fetched.
pub async fn fetch_urls(
    ctx: &AppContext,
    urls: Vec<String>,
    output: Option<&Path>,
    pretty: bool,
) -> Result<RunOutcome> {
    if urls.is_empty() {
        eprintln!("No URLs to fetch");
    } else {
        eprintln!(
            "Fetching {} URLs ({} at a time)...",
            urls.len(),
            ctx.config.fetch.concurrency
        );
    }

    let outcome = run_with(ctx.fetcher.clone(), urls, &ctx.config.fetch).await;

    eprintln!(
        "\n     Successfully fetched data for {} URLs.",
        outcome.successes()
    );

    if let Some(report) = outcome.report() {
        let rendered = render_report(report, pretty)?;
        match output {
            Some(path) => {
                fs::write(path, rendered)?;
                eprintln!("Report written to {}", path.display());
            }
            None => println!("{}", rendered),
        }
    }

    Ok(outcome)
}

pub fn show_config(ctx: &AppContext) -> Result<()> {
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}

/// Merge positional URLs with the ones listed in `file`, keeping order:
/// positional first, then file entries.
pub fn collect_urls(mut urls: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)?;
        urls.extend(parse_url_list(&content));
    }
    Ok(urls)
}

/// Parse a URL list: one URL per line, blank lines and `#` comments ignored
fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn render_report(report: &FetchReport, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(rendered)
}
