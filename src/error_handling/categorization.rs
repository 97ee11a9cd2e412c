//! Error categorization.
//!
//! Classifies transport failures so log lines say what kind of network
//! problem stopped a city, not just that one happened.

/// Kind of transport failure behind a `reqwest::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The server answered with a non-success status.
    Status(u16),
    /// The request timed out.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// Sending the request failed.
    Request,
    /// Reading the response body failed.
    Body,
    /// The response could not be decoded.
    Decode,
    /// The request could not be built.
    Builder,
    /// Redirect handling failed.
    Redirect,
    /// Anything else.
    Other,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportKind::Status(code) => write!(f, "HTTP status {code}"),
            TransportKind::Timeout => f.write_str("timeout"),
            TransportKind::Connect => f.write_str("connection error"),
            TransportKind::Request => f.write_str("request error"),
            TransportKind::Body => f.write_str("body error"),
            TransportKind::Decode => f.write_str("decode error"),
            TransportKind::Builder => f.write_str("request builder error"),
            TransportKind::Redirect => f.write_str("redirect error"),
            TransportKind::Other => f.write_str("other error"),
        }
    }
}

/// Categorizes a `reqwest::Error`.
///
/// HTTP status codes take precedence over the error-kind predicates, since a
/// status error is also reported as `is_status()`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportKind {
    if let Some(status) = error.status() {
        return TransportKind::Status(status.as_u16());
    }

    if error.is_builder() {
        TransportKind::Builder
    } else if error.is_redirect() {
        TransportKind::Redirect
    } else if error.is_timeout() {
        TransportKind::Timeout
    } else if error.is_connect() {
        TransportKind::Connect
    } else if error.is_request() {
        TransportKind::Request
    } else if error.is_body() {
        TransportKind::Body
    } else if error.is_decode() {
        TransportKind::Decode
    } else {
        TransportKind::Other
    }
}

/// Finds the transport failure, if any, in an error's source chain.
pub fn transport_kind_of(error: &(dyn std::error::Error + 'static)) -> Option<TransportKind> {
    let mut current = Some(error);
    while let Some(cause) = current {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return Some(categorize_reqwest_error(reqwest_err));
        }
        current = cause.source();
    }
    None
}
