//! Failure taxonomy for the Tavola client
//!
//! This module provides the error half of the outcome model:
//! - [`FailureKind`]: closed classification of why a call did not succeed
//! - [`ApiFailure`]: a kind plus one human-readable message
//!
//! Every public operation of the API client converts whatever went wrong
//! (transport error, bad payload, non-success status) into an [`ApiFailure`]
//! carried inside an [`crate::ApiResult`]; no other error type crosses the
//! client boundary.
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiFailure, FailureKind};
//!
//! // Construct by kind
//! let err = ApiFailure::validation("Quantity must be positive");
//! assert_eq!(err.kind(), FailureKind::Validation);
//!
//! // Classify a server status code
//! let err = ApiFailure::from_status(http::StatusCode::UNAUTHORIZED, "Invalid credentials");
//! assert_eq!(err.kind(), FailureKind::Authentication);
//! ```

mod kind;
mod types;

pub use kind::FailureKind;
pub use types::ApiFailure;
