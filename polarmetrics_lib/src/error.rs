//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer: upstream failures, payloads the
/// normalization adapters cannot interpret, and rejected input.
#[derive(Debug)]
pub enum LocalityError {
    /// An error from one of the upstream API clients.
    Api(polarmetrics_api::Error),
    /// An upstream answered, but its payload has a shape that cannot be interpreted.
    MalformedUpstream {
        /// Which upstream payload was being read (e.g. "member roster").
        source: &'static str,
        detail: String,
    },
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl LocalityError {
    pub(crate) fn malformed(source: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedUpstream {
            source,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for LocalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::MalformedUpstream { source, detail } => {
                write!(f, "Malformed {} payload: {}", source, detail)
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for LocalityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<polarmetrics_api::Error> for LocalityError {
    fn from(e: polarmetrics_api::Error) -> Self {
        Self::Api(e)
    }
}
