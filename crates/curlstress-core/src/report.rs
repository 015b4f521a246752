//! Plain-text rendering of probe outcomes. Console styling is the caller's job.

use crate::probe::{FailureContext, ProbeFailure, ProbeOutcome, ProbeSuccess};
use crate::size::format_size;

/// `Done`, `Done: text/html`, `Done: text/html (1.5 KiB)` or `Done: (1.5 KiB)`.
pub fn describe_success(success: &ProbeSuccess) -> String {
    let size = format_size(success.content_length);
    match (&success.content_type, size) {
        (Some(ct), Some(size)) => format!("Done: {} ({})", ct, size),
        (Some(ct), None) => format!("Done: {}", ct),
        (None, Some(size)) => format!("Done: ({})", size),
        (None, None) => "Done".to_string(),
    }
}

/// `<Kind>: <message>`, plus the retry hint when the server sent one.
pub fn describe_failure(failure: &ProbeFailure) -> String {
    let mut line = format!("{}: {}", failure.kind, failure.message);
    if let FailureContext::RetryAfter {
        retry_after: Some(after),
    } = &failure.context
    {
        line.push_str(&format!(" (retry after {})", after));
    }
    line
}

pub fn describe(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Success(s) => describe_success(s),
        ProbeOutcome::Failure(f) => describe_failure(f),
    }
}
