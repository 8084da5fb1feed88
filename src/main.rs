use anyhow::Result;
use clap::Parser;
use doi_harvest::config::{find_config_file, Config};
use doi_harvest::pipeline;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// DOI Harvest - Resolve local paper filenames to DOIs via Semantic Scholar
#[derive(Parser, Debug)]
#[command(name = "doi-harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Resolve local paper filenames to DOIs via the Semantic Scholar API and export a semicolon-delimited index",
    long_about = None
)]
struct Cli {
    /// Directory containing the paper files (searched recursively)
    papers_dir: PathBuf,

    /// Output file path
    #[arg(long, short, default_value = "papers.csv")]
    output: PathBuf,

    /// Seconds to wait after each API request (overrides config)
    #[arg(long)]
    delay: Option<u64>,

    /// Request timeout in seconds (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("doi_harvest={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let mut config = if let Some(config_path) = &cli.config {
        Config::load(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        Config::load(&config_path)?
    } else {
        Config::default()
    };
    config = config.apply_env();

    if let Some(delay) = cli.delay {
        config.delay_secs = delay;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let summary = pipeline::run(&config, &cli.papers_dir, &cli.output).await?;

    if !cli.quiet {
        println!(
            "{} titles scanned, {} resolved, {} unresolved, {} records written to {}",
            summary.scanned,
            summary.resolved,
            summary.unresolved,
            summary.exported,
            cli.output.display()
        );
    }

    Ok(())
}
