//! CLI for the curlstress prober.

mod commands;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use curlstress_core::config;
use std::path::PathBuf;

use commands::{run_curl, run_probe};

/// Top-level CLI for curlstress.
#[derive(Debug, Parser)]
#[command(name = "curlstress")]
#[command(about = "curlstress: repeated HTTP GETs over a URL list, one at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Stress the target by fetching every URL of the list, cycle after cycle.
    Curl {
        /// Number of passes over the URL list (default from config, 1024).
        cycles: Option<u64>,

        /// Use the HTTPS URL list instead of the HTTP one.
        #[arg(short = 'S', long)]
        https: bool,

        /// Read URLs from this file instead of the configured list.
        #[arg(long, value_name = "FILE")]
        urls: Option<PathBuf>,
    },

    /// Probe a single URL once and print the outcome.
    Probe {
        /// Absolute HTTP/HTTPS URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Curl {
                cycles,
                https,
                urls,
            } => run_curl(&cfg, cycles, https, urls).await?,
            CliCommand::Probe { url } => run_probe(&cfg, &url).await?,
        }

        Ok(())
    }
}
