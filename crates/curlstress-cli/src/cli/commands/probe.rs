//! `curlstress probe <url>` – one probe, one line.

use anyhow::{Context, Result};
use curlstress_core::config::StressConfig;
use curlstress_core::probe;

use crate::cli::console;

pub async fn run_probe(cfg: &StressConfig, url: &str) -> Result<()> {
    let options = cfg.probe_options();
    let outcome = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || probe::probe(&url, &options)
    })
    .await
    .context("probe task join")?;

    println!("- {} - {}", url, console::styled_outcome(&outcome));
    Ok(())
}
