//! Classify HTTP statuses and curl errors into probe failures.

use super::kind::{ErrorKind, TransportCause};
use crate::probe::{FailureContext, ProbeFailure, ResponseHead};

/// Default challenge when a 401 carries no `WWW-Authenticate`.
const DEFAULT_CHALLENGE: &str = "Bearer";

/// Map an HTTP status (>= 300) to its `ErrorKind`.
pub fn classify_http_status(status: u16) -> ErrorKind {
    match status {
        400 => ErrorKind::BadRequest,
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::AccessDenied,
        404 => ErrorKind::NotFound,
        405 => ErrorKind::MethodNotAllowed,
        406 => ErrorKind::NotAcceptable,
        409 => ErrorKind::Conflict,
        410 => ErrorKind::Gone,
        411 => ErrorKind::LengthRequired,
        412 => ErrorKind::PreconditionFailed,
        415 => ErrorKind::UnsupportedMediaType,
        422 => ErrorKind::UnprocessableEntity,
        428 => ErrorKind::PreconditionRequired,
        429 => ErrorKind::TooManyRequests,
        503 => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::GenericHttpError,
    }
}

/// Build the failure for an error response.
///
/// `message` overrides the reason phrase and `status` overrides the status
/// of `head`; pass `None` to take both from the response.
pub fn http_failure(head: &ResponseHead, message: Option<&str>, status: Option<u16>) -> ProbeFailure {
    let status = status.unwrap_or(head.status);
    let message = match message {
        Some(m) => m.to_string(),
        None => head.reason_phrase(),
    };
    let kind = classify_http_status(status);

    let context = match kind {
        ErrorKind::Unauthorized => FailureContext::Unauthorized {
            challenge: head
                .first("WWW-Authenticate")
                .unwrap_or(DEFAULT_CHALLENGE)
                .to_string(),
        },
        ErrorKind::MethodNotAllowed => FailureContext::MethodNotAllowed {
            allow: head.first("Allow").map(split_allow).unwrap_or_default(),
        },
        ErrorKind::TooManyRequests | ErrorKind::ServiceUnavailable => FailureContext::RetryAfter {
            retry_after: head.first("Retry-After").map(str::to_string),
        },
        _ => FailureContext::None,
    };

    ProbeFailure {
        kind,
        http_status: Some(status),
        message,
        context,
    }
}

fn split_allow(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a curl error for reporting.
pub fn classify_curl_error(e: &curl::Error) -> TransportCause {
    if e.is_operation_timedout() {
        return TransportCause::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return TransportCause::Resolve;
    }
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cipher()
    {
        return TransportCause::Tls;
    }
    if e.is_too_many_redirects() {
        return TransportCause::TooManyRedirects;
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportCause::Connect;
    }
    TransportCause::Other
}

/// Build the failure for a probe that never got a final response.
pub fn transport_failure(e: &curl::Error) -> ProbeFailure {
    transport_failure_with(classify_curl_error(e), e.to_string())
}

/// Transport failure that did not come from curl (rejected URL, no status line).
pub fn transport_failure_with(cause: TransportCause, message: impl Into<String>) -> ProbeFailure {
    ProbeFailure {
        kind: ErrorKind::TransportError,
        http_status: None,
        message: message.into(),
        context: FailureContext::Transport { cause },
    }
}
