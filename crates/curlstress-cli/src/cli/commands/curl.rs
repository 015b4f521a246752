//! `curlstress curl [CYCLES] [--https] [--urls FILE]` – repeated probing of a URL list.

use anyhow::{Context, Result};
use curlstress_core::config::StressConfig;
use curlstress_core::probe::CurlProber;
use curlstress_core::runner;
use curlstress_core::url_list::{self, UrlScheme};
use std::path::PathBuf;

use crate::cli::console::{self, ConsoleReporter};

/// Picks the URL list: explicit file first, then the configured list for the scheme.
pub(crate) fn urls_file(cfg: &StressConfig, https: bool, urls: Option<PathBuf>) -> PathBuf {
    urls.unwrap_or_else(|| {
        cfg.urls_path(UrlScheme::from_https_flag(https))
            .to_path_buf()
    })
}

pub async fn run_curl(
    cfg: &StressConfig,
    cycles: Option<u64>,
    https: bool,
    urls: Option<PathBuf>,
) -> Result<()> {
    let path = urls_file(cfg, https, urls);
    let list = url_list::load_urls(&path)?;
    let cycles = cycles.unwrap_or(cfg.cycles);
    tracing::info!(
        "curl stress: {} URLs from {}, {} cycles",
        list.len(),
        path.display(),
        cycles
    );

    console::h1("# Memory Stress using cURL");
    let prober = CurlProber::new(cfg.probe_options());
    let issued = tokio::task::spawn_blocking(move || {
        let mut reporter = ConsoleReporter;
        runner::run_cycles(&list, cycles, &prober, &mut reporter)
    })
    .await
    .context("probe loop join")?;

    tracing::info!("curl stress finished after {} probes", issued);
    Ok(())
}
