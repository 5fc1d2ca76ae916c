use std::fmt;

use thiserror::Error;

/// Failure of a single fetch, tagged with the target it was for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch {url}: {kind}")]
pub struct FetchError {
    pub url: String,
    pub kind: FailureKind,
}

impl FetchError {
    pub(crate) fn new(url: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Outcome of a whole run. A run either returns the full result list or
/// fails with one of these; there is no partial-success return value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The run observed a cancellation request after a completed step.
    /// Partial results were already delivered through the progress sink;
    /// the error itself carries none.
    #[error("download run cancelled")]
    Cancelled,
}
