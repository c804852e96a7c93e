//! Failure kind classification

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of failure categories for API calls
///
/// The kind is chosen once by whoever produces the failure and never changes
/// afterwards. Consumers branch on it to decide how to surface or recover
/// from a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport-level failure: connection refused, DNS, timeout
    Network,
    /// Server-side failure: 5xx status or a non-JSON error page
    Server,
    /// Request rejected as invalid (400)
    Validation,
    /// Authentication missing or rejected (401)
    Authentication,
    /// Authenticated but not allowed (403)
    Permission,
    /// Resource does not exist (404)
    NotFound,
    /// Anything that fits no other category
    Generic,
}

impl FailureKind {
    /// Classify a non-success HTTP status code
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::Validation,
            StatusCode::UNAUTHORIZED => Self::Authentication,
            StatusCode::FORBIDDEN => Self::Permission,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE => Self::Server,
            _ => Self::Generic,
        }
    }

    /// Get the fallback message for this kind
    ///
    /// Used when a failure is constructed with an empty message, so that
    /// consumers can always display something readable.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Server => "Server error",
            Self::Validation => "Validation failed",
            Self::Authentication => "Authentication required",
            Self::Permission => "Permission denied",
            Self::NotFound => "Resource not found",
            Self::Generic => "Something went wrong",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Server => "server",
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Permission => "permission",
            Self::NotFound => "not_found",
            Self::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}
