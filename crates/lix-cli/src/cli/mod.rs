//! CLI for the lix link extractor.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use lix_core::config;
use lix_core::output;
use lix_core::retry::RetryPolicy;
use lix_core::scan::{self, ScanRequest};

/// Extract unique links from a single web page.
#[derive(Debug, Parser)]
#[command(name = "lix")]
#[command(about = "lix: extract unique links from a web page", long_about = None)]
pub struct Cli {
    /// Page URL to scan (must start with http:// or https://).
    pub url: String,

    /// Write links to this file instead of stdout (created atomically).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds (default from config, normally 10).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Custom User-Agent header.
    #[arg(long, value_name = "STRING")]
    pub user_agent: Option<String>,

    /// Sort links alphabetically instead of first-seen order.
    #[arg(long)]
    pub sort: bool,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let retry = cfg
        .retry
        .as_ref()
        .map(RetryPolicy::from)
        .unwrap_or_default();

    let request = ScanRequest {
        url: cli.url,
        timeout: Duration::from_secs(cli.timeout.unwrap_or(cfg.timeout_secs)),
        user_agent: cli.user_agent.unwrap_or(cfg.user_agent),
        tags: cfg.scan_tags,
        sort: cli.sort,
    };

    let links = scan::run(&request, &retry)?;
    output::write_links(cli.output.as_deref(), &links)?;

    // Keep stdout clean when it carries the links themselves.
    if let Some(path) = &cli.output {
        println!("extracted {} links -> {}", links.len(), path.display());
    }
    tracing::info!(url = %request.url, links = links.len(), "done");

    Ok(())
}
