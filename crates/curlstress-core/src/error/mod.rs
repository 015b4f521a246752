//! Failure taxonomy for probes.
//!
//! Maps received HTTP statuses onto a closed set of `ErrorKind`s and curl
//! errors onto `TransportError` with a `TransportCause`, so that callers
//! only branch on the returned outcome.

mod classify;
mod kind;

pub use classify::{
    classify_curl_error, classify_http_status, http_failure, transport_failure,
    transport_failure_with,
};
pub use kind::{ErrorKind, TransportCause};
