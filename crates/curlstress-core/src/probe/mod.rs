//! HTTP GET probing.
//!
//! Uses the curl crate (libcurl) to issue one GET per URL, receive and
//! discard the body, and classify the final response (or the transport
//! failure) into a `ProbeOutcome`. Error statuses are not treated as curl
//! failures; the status is classified here.

mod head;
mod outcome;

pub use head::ResponseHead;
pub use outcome::{FailureContext, ProbeFailure, ProbeOutcome, ProbeSuccess};

use crate::error::{self, TransportCause};
use crate::url_list;
use std::time::Duration;

/// Options applied to the curl handle of every probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub connect_timeout: Duration,
    /// Whole-transfer timeout, body included. `None` lets a slow body run
    /// to completion.
    pub timeout: Option<Duration>,
    pub follow_redirects: bool,
    pub max_redirects: u32,
    pub user_agent: Option<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: None,
            follow_redirects: true,
            max_redirects: 5,
            user_agent: None,
        }
    }
}

/// Something that turns a URL into an outcome. `CurlProber` is the real one;
/// the runner only depends on this trait.
pub trait Prober {
    fn probe(&self, url: &str) -> ProbeOutcome;
}

/// `Prober` backed by libcurl, one fresh handle per call.
#[derive(Debug, Clone, Default)]
pub struct CurlProber {
    pub options: ProbeOptions,
}

impl CurlProber {
    pub fn new(options: ProbeOptions) -> Self {
        Self { options }
    }
}

impl Prober for CurlProber {
    fn probe(&self, url: &str) -> ProbeOutcome {
        probe(url, &self.options)
    }
}

/// Performs one GET against `url` and classifies the result.
///
/// Never fails: transport errors become `ErrorKind::TransportError`,
/// statuses >= 300 become the matching HTTP failure kind.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn probe(url: &str, options: &ProbeOptions) -> ProbeOutcome {
    if let Err(reason) = url_list::validate_url(url) {
        tracing::debug!(url, %reason, "url rejected");
        return ProbeOutcome::Failure(error::transport_failure_with(
            TransportCause::InvalidUrl,
            format!("invalid URL {url}: {reason}"),
        ));
    }
    match perform_get(url, options) {
        Ok((head, body_bytes)) => {
            tracing::debug!(
                url,
                status = head.status,
                body_bytes,
                "probe response"
            );
            outcome_for(&head)
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "probe transport failure");
            ProbeOutcome::Failure(error::transport_failure(&e))
        }
    }
}

/// Classify a received response head.
///
/// Status 0 means no status line was seen, which is not a response.
pub fn outcome_for(head: &ResponseHead) -> ProbeOutcome {
    if head.status == 0 {
        return ProbeOutcome::Failure(error::transport_failure_with(
            TransportCause::Other,
            "no HTTP status line received",
        ));
    }
    if head.status >= 300 {
        return ProbeOutcome::Failure(error::http_failure(head, None, None));
    }
    ProbeOutcome::Success(ProbeSuccess {
        content_type: head.first("Content-Type").and_then(media_type),
        content_length: head
            .first("Content-Length")
            .and_then(|v| v.trim().parse::<u64>().ok()),
    })
}

/// `text/html; charset=utf-8` -> `text/html`.
fn media_type(value: &str) -> Option<String> {
    let media = value.split(';').next().unwrap_or("").trim();
    if media.is_empty() {
        None
    } else {
        Some(media.to_string())
    }
}

/// Runs the GET on a handle scoped to this call. Returns the final response
/// head and the number of body bytes received.
fn perform_get(url: &str, options: &ProbeOptions) -> Result<(ResponseHead, u64), curl::Error> {
    let mut lines: Vec<String> = Vec::new();
    let mut body_bytes = 0u64;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.fail_on_error(false)?;
    easy.follow_location(options.follow_redirects)?;
    if options.follow_redirects {
        easy.max_redirections(options.max_redirects)?;
    }
    easy.connect_timeout(options.connect_timeout)?;
    if let Some(timeout) = options.timeout {
        easy.timeout(timeout)?;
    }
    if let Some(ua) = &options.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            lines.push(head::decode_header_line(data));
            true
        })?;
        transfer.write_function(|data| {
            body_bytes += data.len() as u64;
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let mut head = head::parse_head_lines(&lines);
    let code = easy.response_code()?;
    if code != 0 {
        head.status = u16::try_from(code).unwrap_or(u16::MAX);
    }
    Ok((head, body_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn head(status: u16, headers: &[(&str, &str)]) -> ResponseHead {
        ResponseHead {
            status,
            reason: None,
            headers: headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn success_strips_content_type_parameters() {
        let outcome = outcome_for(&head(
            200,
            &[
                ("Content-Type", "text/html; charset=utf-8"),
                ("Content-Length", "1536"),
            ],
        ));
        assert_eq!(
            outcome,
            ProbeOutcome::Success(ProbeSuccess {
                content_type: Some("text/html".to_string()),
                content_length: Some(1536),
            })
        );
    }

    #[test]
    fn success_without_metadata() {
        let outcome = outcome_for(&head(204, &[]));
        assert_eq!(outcome, ProbeOutcome::Success(ProbeSuccess::default()));
    }

    #[test]
    fn non_numeric_content_length_is_absent() {
        let outcome = outcome_for(&head(200, &[("Content-Length", "lots")]));
        assert_eq!(outcome.as_success().unwrap().content_length, None);
    }

    #[test]
    fn every_status_below_300_is_success() {
        for status in [100, 200, 201, 202, 204, 206, 299] {
            assert!(outcome_for(&head(status, &[])).is_success(), "status {status}");
        }
    }

    #[test]
    fn status_300_and_above_is_failure() {
        let outcome = outcome_for(&head(300, &[]));
        let f = outcome.as_failure().unwrap();
        assert_eq!(f.kind, ErrorKind::GenericHttpError);
        assert_eq!(f.http_status, Some(300));
        assert_eq!(f.message, "Multiple Choices");
    }

    #[test]
    fn head_without_status_is_transport_error() {
        let outcome = outcome_for(&head(0, &[("Content-Type", "text/plain")]));
        let f = outcome.as_failure().unwrap();
        assert_eq!(f.kind, ErrorKind::TransportError);
        assert_eq!(f.http_status, None);
        assert_eq!(
            f.context,
            FailureContext::Transport {
                cause: TransportCause::Other
            }
        );
    }

    #[test]
    fn non_http_schemes_fail_without_a_request() {
        for url in ["file:///etc/hostname", "ftp://example.com/x", "not a url"] {
            let outcome = probe(url, &ProbeOptions::default());
            let f = outcome.as_failure().unwrap();
            assert_eq!(f.kind, ErrorKind::TransportError, "{url}");
            assert_eq!(f.http_status, None, "{url}");
            assert_eq!(
                f.context,
                FailureContext::Transport {
                    cause: TransportCause::InvalidUrl
                },
                "{url}"
            );
            assert!(f.message.contains(url), "{}", f.message);
        }
    }

    #[test]
    fn default_options_have_no_total_timeout() {
        let opts = ProbeOptions::default();
        assert_eq!(opts.timeout, None);
        assert_eq!(opts.connect_timeout, Duration::from_secs(15));
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn log_lines_for(url: &str) -> usize {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            probe(url, &ProbeOptions::default());
        });
        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        text.lines().filter(|l| l.contains(url)).count()
    }

    #[test]
    fn one_log_line_per_call() {
        assert_eq!(log_lines_for("file:///etc/hostname"), 1);

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        assert_eq!(log_lines_for(&format!("http://127.0.0.1:{port}/")), 1);
    }

    #[test]
    fn media_type_handles_bare_and_empty_values() {
        assert_eq!(media_type("application/json"), Some("application/json".to_string()));
        assert_eq!(media_type(" image/png ;q=1"), Some("image/png".to_string()));
        assert_eq!(media_type(""), None);
        assert_eq!(media_type("; charset=utf-8"), None);
    }
}
