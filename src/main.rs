use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fanfetch::app::AppContext;
use fanfetch::cli::{commands, Cli, Commands};
use fanfetch::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "fanfetch=debug,info" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Fetch {
            urls,
            file,
            output,
            pretty,
        } => {
            let urls = commands::collect_urls(urls, file.as_deref())?;
            let outcome = commands::fetch_urls(&ctx, urls, output.as_deref(), pretty).await?;
            if outcome.is_no_data() {
                anyhow::bail!("No data fetched from the URLs");
            }
        }
        Commands::Config => {
            commands::show_config(&ctx)?;
        }
    }

    Ok(())
}
