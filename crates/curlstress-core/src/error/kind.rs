use std::fmt;

/// Category of a failed probe.
///
/// Every HTTP status at or above 300 maps to exactly one variant; statuses
/// without a dedicated variant land in `GenericHttpError`. Failures that
/// never produced a response are `TransportError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was obtained (DNS, connect, reset, timeout, TLS, ...).
    TransportError,
    BadRequest,
    Unauthorized,
    AccessDenied,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    UnsupportedMediaType,
    UnprocessableEntity,
    PreconditionRequired,
    TooManyRequests,
    ServiceUnavailable,
    /// Any status >= 300 without a dedicated variant.
    GenericHttpError,
}

impl ErrorKind {
    /// Stable name used in reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::TransportError => "TransportError",
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::AccessDenied => "AccessDenied",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::MethodNotAllowed => "MethodNotAllowed",
            ErrorKind::NotAcceptable => "NotAcceptable",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Gone => "Gone",
            ErrorKind::LengthRequired => "LengthRequired",
            ErrorKind::PreconditionFailed => "PreconditionFailed",
            ErrorKind::UnsupportedMediaType => "UnsupportedMediaType",
            ErrorKind::UnprocessableEntity => "UnprocessableEntity",
            ErrorKind::PreconditionRequired => "PreconditionRequired",
            ErrorKind::TooManyRequests => "TooManyRequests",
            ErrorKind::ServiceUnavailable => "ServiceUnavailable",
            ErrorKind::GenericHttpError => "GenericHttpError",
        }
    }

    /// True for every kind derived from an HTTP status.
    pub fn is_http(self) -> bool {
        self != ErrorKind::TransportError
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finer-grained reason for a `TransportError`, taken from the curl error.
///
/// Informational only: it never changes the failure's `ErrorKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCause {
    /// Connect or total transfer timeout expired.
    Timeout,
    /// Host or proxy name could not be resolved.
    Resolve,
    /// Connection refused, reset, or dropped mid-transfer.
    Connect,
    /// TLS handshake or certificate verification failed.
    Tls,
    /// Redirect limit exceeded.
    TooManyRedirects,
    /// Not an absolute http/https URL; nothing was sent.
    InvalidUrl,
    Other,
}

impl fmt::Display for TransportCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportCause::Timeout => "timeout",
            TransportCause::Resolve => "resolve",
            TransportCause::Connect => "connect",
            TransportCause::Tls => "tls",
            TransportCause::TooManyRedirects => "too many redirects",
            TransportCause::InvalidUrl => "invalid url",
            TransportCause::Other => "other",
        };
        f.write_str(s)
    }
}
