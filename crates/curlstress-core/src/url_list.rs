//! URL lists: newline-delimited files of absolute http/https URLs.
//!
//! Lines are trimmed; blank lines are skipped. Any other line that is not an
//! absolute http or https URL rejects the whole list.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Which list to load when no explicit file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlScheme {
    #[default]
    Http,
    Https,
}

impl UrlScheme {
    pub fn from_https_flag(https: bool) -> Self {
        if https {
            UrlScheme::Https
        } else {
            UrlScheme::Http
        }
    }
}

#[derive(Debug, Error)]
pub enum UrlListError {
    #[error("cannot read URL list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid URL {url:?}: {reason}")]
    InvalidUrl {
        line: usize,
        url: String,
        reason: String,
    },
}

/// Reads and validates the URL list at `path`.
pub fn load_urls(path: &Path) -> Result<Vec<String>, UrlListError> {
    let data = fs::read_to_string(path).map_err(|source| UrlListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let urls = parse_urls(&data)?;
    tracing::debug!("loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Parses list contents, keeping file order.
pub fn parse_urls(data: &str) -> Result<Vec<String>, UrlListError> {
    let mut urls = Vec::new();
    for (idx, raw) in data.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        validate_url(line).map_err(|reason| UrlListError::InvalidUrl {
            line: idx + 1,
            url: line.to_string(),
            reason,
        })?;
        urls.push(line.to_string());
    }
    Ok(urls)
}

/// Accept only absolute http/https URLs with a host.
pub(crate) fn validate_url(s: &str) -> Result<(), String> {
    let url = Url::parse(s).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {other}")),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("missing host".to_string());
    }
    Ok(())
}
