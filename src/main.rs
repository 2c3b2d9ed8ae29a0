//! ADK docs scraper entry point
//!
//! This is the command-line interface for the documentation crawler.

use adk_docs_scraper::config::{load_config, validate, Config};
use adk_docs_scraper::crawler::crawl;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// ADK docs scraper: mirror a documentation site as HTML and plain text
///
/// Crawls breadth-first from a seed URL, following only links that start with
/// the seed, then writes a consolidated text file and a markdown index.
#[derive(Parser, Debug)]
#[command(name = "adk-docs-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Mirror a documentation site as HTML and plain text", long_about = None)]
struct Cli {
    /// Seed URL; also the prefix every crawled URL must start with
    #[arg(value_name = "SEED_URL")]
    seed_url: Option<String>,

    /// Output directory for html/, text/ and the consolidated files
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pause after every fetch, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the effective configuration and exit without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let seed = config.crawl.seed_url.clone();
    let report = crawl(config)
        .await
        .with_context(|| format!("Crawl from {} failed", seed))?;

    tracing::info!(
        "Scraping completed! {} pages saved, {} indexed",
        report.pages_saved,
        report.pages_indexed
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("adk_docs_scraper=info,warn"),
            1 => EnvFilter::new("adk_docs_scraper=debug,info"),
            2 => EnvFilter::new("adk_docs_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies CLI overrides on top
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(seed) = &cli.seed_url {
        config.crawl.seed_url = seed.clone();
    }
    if let Some(output) = &cli.output {
        config.crawl.output_dir = output.to_string_lossy().into_owned();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawl.delay_ms = delay_ms;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== ADK Docs Scraper Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", config.crawl.seed_url);
    println!("  Output directory: {}", config.crawl.output_dir);
    println!("  Delay: {}ms", config.crawl.delay_ms);

    println!("\nOutput:");
    println!("  Consolidated file: {}", config.output.consolidated_file);
    println!("  Index file: {}", config.output.index_file);
    println!("  Consolidated heading: {}", config.output.consolidated_heading);
    println!("  Index heading: {}", config.output.index_heading);

    println!("\n✓ Configuration is valid");
}
