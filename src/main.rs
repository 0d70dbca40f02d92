//! # Scenariq CLI
//!
//! Command-line interface for the scenariq library.
//! Asks the routing service for scenic detours and prints them as cards.

use anyhow::Context;
use clap::Parser;
use log::{error, LevelFilter};
use scenariq::{ClientConfig, RoutesClient, SearchQuery, SearchSession};

mod cli;

/// Start used when none is given
const DEFAULT_START: &str = "Mumbai";

/// Destination used when none is given
const DEFAULT_END: &str = "Goa";

/// Command-line interface for scenariq
#[derive(Parser)]
#[command(name = "scenariq")]
#[command(about = "Find scenic detours between two places")]
#[command(long_about = "Asks a scenic routing service for detour options and prints one card per route:
  scenariq                                  # Mumbai -> Goa against http://localhost:8080
  scenariq --start Pune --end Gokarna       # Custom endpoints
  scenariq --base-url https://routes.example.com --json

The routing service base URL comes from --base-url, then SCENARIQ_API_BASE_URL,
then http://localhost:8080.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Origin of the trip
    #[arg(short, long, default_value = DEFAULT_START)]
    start: String,

    /// Destination of the trip
    #[arg(short, long, default_value = DEFAULT_END)]
    end: String,

    /// Base URL of the routing service
    #[arg(long)]
    base_url: Option<String>,

    /// Print routes and metrics as JSON instead of cards
    #[arg(long)]
    json: bool,

    /// Show the request URL without sending it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Configuration from the environment, overridden by CLI flags
fn resolve_config(base_url: Option<&str>) -> ClientConfig {
    let config = ClientConfig::from_env();
    match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_module("scenariq", LevelFilter::Debug);
    }
    logger.init();

    let config = resolve_config(cli.base_url.as_deref());
    let client = RoutesClient::with_config(config);

    if cli.dry_run {
        let url = client
            .request_url(&SearchQuery::new(&cli.start, &cli.end))
            .context("cannot build routing request")?;
        eprintln!(
            "🔍 [DRY RUN] Would request: {url} (timeout {}s)",
            client.config().timeout.as_secs()
        );
        println!("{url}");
        return Ok(());
    }

    let session = SearchSession::new(client);
    let spinner = cli::SearchSpinner::start(&format!(
        "Finding scenic routes {} → {}",
        cli.start, cli.end
    ));
    let outcome = session.search(&cli.start, &cli.end).await;
    spinner.finish();

    let routes = match outcome {
        Ok(routes) => routes,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(anyhow::Error::new(e).context(format!(
                "search {} → {} failed",
                cli.start, cli.end
            )));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        println!("{}", cli::render_results(&routes));
    }

    Ok(())
}
