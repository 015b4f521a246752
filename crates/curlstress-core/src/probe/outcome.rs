use crate::error::{ErrorKind, TransportCause};

/// Classified result of one probe. Produced once, consumed by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success(ProbeSuccess),
    Failure(ProbeFailure),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }

    pub fn as_failure(&self) -> Option<&ProbeFailure> {
        match self {
            ProbeOutcome::Failure(f) => Some(f),
            ProbeOutcome::Success(_) => None,
        }
    }

    pub fn as_success(&self) -> Option<&ProbeSuccess> {
        match self {
            ProbeOutcome::Success(s) => Some(s),
            ProbeOutcome::Failure(_) => None,
        }
    }
}

/// Metadata of a response with status < 300.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSuccess {
    /// `Content-Type` without parameters, e.g. `text/html`.
    pub content_type: Option<String>,
    /// `Content-Length`, when present and numeric.
    pub content_length: Option<u64>,
}

/// A probe that failed at transport level or returned status >= 300.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub kind: ErrorKind,
    /// Set only when a response was received.
    pub http_status: Option<u16>,
    pub message: String,
    pub context: FailureContext,
}

/// Auxiliary data some failure kinds keep from the response (or the curl error).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FailureContext {
    #[default]
    None,
    /// `WWW-Authenticate` challenge of a 401 (`"Bearer"` when absent).
    Unauthorized { challenge: String },
    /// Methods listed in `Allow` on a 405.
    MethodNotAllowed { allow: Vec<String> },
    /// `Retry-After` on a 429 or 503.
    RetryAfter { retry_after: Option<String> },
    Transport { cause: TransportCause },
}
