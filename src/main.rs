//! Sumi-Sitemap main entry point
//!
//! This is the command-line interface for the Sumi-Sitemap surveyor.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use sumi_sitemap::config::{load_config_with_hash, validate, Config, OutputFormat};
use sumi_sitemap::crawler::format_user_agent;
use sumi_sitemap::output::{
    print_statistics, render_report, write_output, DiscoveryStatistics, SummaryContext,
};
use sumi_sitemap::{SiteSource, SitemapDiscovery};
use tracing_subscriber::EnvFilter;

/// Sumi-Sitemap: A polite sitemap surveyor
///
/// Sumi-Sitemap reads a site's robots.txt, fetches every sitemap it
/// declares, and lists the URLs each sitemap contains.
#[derive(Parser, Debug)]
#[command(name = "sumi-sitemap")]
#[command(version)]
#[command(about = "A polite sitemap surveyor", long_about = None)]
struct Cli {
    /// Site origin to survey (e.g. https://example.com)
    #[arg(value_name = "ORIGIN")]
    origin: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Report format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also write the rendered report to this file (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum sitemaps fetched at once (overrides the config file)
    #[arg(long, value_name = "N")]
    concurrency: Option<u32>,

    /// Validate config and origin and show what would be fetched without fetching
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Print summary statistics instead of the full report
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash, source) =
        prepare(&cli).with_context(|| format!("Cannot survey '{}'", cli.origin))?;

    if cli.dry_run {
        handle_dry_run(&config, &source);
    } else if cli.stats {
        handle_stats(&config, &source)
            .await
            .context("Discovery run failed")?;
    } else {
        handle_discover(&config, config_hash, &source)
            .await
            .context("Discovery run failed")?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_sitemap=info,warn"),
            1 => EnvFilter::new("sumi_sitemap=debug,info"),
            2 => EnvFilter::new("sumi_sitemap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves the effective configuration and the origin to survey
fn prepare(cli: &Cli) -> sumi_sitemap::Result<(Config, Option<String>, SiteSource)> {
    let (config, hash) = load_effective_config(cli)?;
    let source = SiteSource::parse(&cli.origin)?;
    Ok((config, hash, source))
}

/// Loads the config file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> sumi_sitemap::Result<(Config, Option<String>)> {
    let (mut config, hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(path) = &cli.output {
        config.output.summary_path = Some(path.display().to_string());
    }
    if let Some(timeout) = cli.timeout {
        config.discovery.request_timeout_secs = timeout;
    }
    if let Some(concurrency) = cli.concurrency {
        config.discovery.max_concurrent_sitemaps = concurrency;
    }

    validate(&config)?;

    Ok((config, hash))
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &Config, source: &SiteSource) {
    println!("=== Sumi-Sitemap Dry Run ===\n");

    println!("Target:");
    println!("  Origin: {}", source);
    println!("  Robots.txt: {}", source.robots_url());

    println!("\nDiscovery Configuration:");
    println!(
        "  Request timeout: {}s",
        config.discovery.request_timeout_secs
    );
    println!(
        "  Connect timeout: {}s",
        config.discovery.connect_timeout_secs
    );
    println!(
        "  Max concurrent sitemaps: {}",
        config.discovery.max_concurrent_sitemaps
    );

    println!("\nUser Agent:");
    println!("  {}", format_user_agent(&config.user_agent));

    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    match &config.output.summary_path {
        Some(path) => println!("  Summary: {}", path),
        None => println!("  Summary: (stdout only)"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: runs discovery and prints statistics
async fn handle_stats(config: &Config, source: &SiteSource) -> sumi_sitemap::Result<()> {
    let discovery = SitemapDiscovery::new(config)?;
    let report = discovery.discover_all(source).await;

    print_statistics(&DiscoveryStatistics::from_report(&report));

    Ok(())
}

/// Handles the main discovery operation
async fn handle_discover(
    config: &Config,
    config_hash: Option<String>,
    source: &SiteSource,
) -> sumi_sitemap::Result<()> {
    let discovery = SitemapDiscovery::new(config)?;
    let report = discovery.discover_all(source).await;

    let context = SummaryContext::now(config_hash);
    let rendered = render_report(&report, config.output.format, &context);
    print!("{}", rendered);

    if let Some(path) = &config.output.summary_path {
        write_output(Path::new(path), &rendered)?;
        tracing::info!("Report written to: {}", path);
    }

    if !report.is_complete() {
        tracing::warn!(
            "Discovery finished with {} failure(s)",
            report.errors().len()
        );
    }

    Ok(())
}
