//! Failure value carried by unsuccessful API results

use super::kind::FailureKind;
use http::StatusCode;
use thiserror::Error;

/// A classified API failure
///
/// Carries exactly one [`FailureKind`] and one human-readable message. The
/// message is the whole payload; there is no structured detail map. Both are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiFailure {
    kind: FailureKind,
    message: String,
}

impl ApiFailure {
    /// Create a failure with an explicit kind
    ///
    /// An empty message is replaced by the kind's fallback so the message is
    /// always displayable.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };
        Self { kind, message }
    }

    /// Create a failure classified from a non-success HTTP status code
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(FailureKind::from_status(status), message)
    }

    /// Get the failure kind
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Get the failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure and take its message
    pub fn into_message(self) -> String {
        self.message
    }

    // ==================== Convenience constructors ====================

    /// Transport-level failure (connection, DNS, timeout)
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    /// Server-side failure
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Server, message)
    }

    /// Invalid request
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Validation, message)
    }

    /// Authentication missing or rejected
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Authentication, message)
    }

    /// Authenticated but not allowed
    pub fn permission(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Permission, message)
    }

    /// Resource does not exist
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    /// Uncategorized failure
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Generic, message)
    }
}
