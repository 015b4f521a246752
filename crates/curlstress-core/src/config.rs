use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::probe::ProbeOptions;
use crate::url_list::UrlScheme;

/// curl handle parameters (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (body included). Unset means no
    /// limit; only the connect phase is bounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Follow `Location` on 3xx responses.
    pub follow_redirects: bool,
    /// Redirect hops allowed before the probe fails at transport level.
    pub max_redirects: u32,
    /// Optional `User-Agent`; curl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: None,
            follow_redirects: true,
            max_redirects: 5,
            user_agent: None,
        }
    }
}

impl ProbeConfig {
    pub fn to_options(&self) -> ProbeOptions {
        ProbeOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            follow_redirects: self.follow_redirects,
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Global configuration loaded from `~/.config/curlstress/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressConfig {
    /// Passes over the URL list when the CLI gets no cycle count.
    pub cycles: u64,
    /// URL list used without `--https`.
    pub http_urls: PathBuf,
    /// URL list used with `--https`.
    pub https_urls: PathBuf,
    /// Optional probe section; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            cycles: 1024,
            http_urls: PathBuf::from("data/http_urls.txt"),
            https_urls: PathBuf::from("data/https_urls.txt"),
            probe: None,
        }
    }
}

impl StressConfig {
    /// URL list file for the given scheme.
    pub fn urls_path(&self, scheme: UrlScheme) -> &Path {
        match scheme {
            UrlScheme::Http => &self.http_urls,
            UrlScheme::Https => &self.https_urls,
        }
    }

    pub fn probe_options(&self) -> ProbeOptions {
        self.probe.clone().unwrap_or_default().to_options()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("curlstress")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StressConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like `load_or_init` but with an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<StressConfig> {
    if !path.exists() {
        let default_cfg = StressConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: StressConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
