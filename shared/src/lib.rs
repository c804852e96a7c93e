//! Shared types for the Tavola client
//!
//! Common types used by the API client and its consumers: the two-variant
//! outcome type [`ApiResult`] and the closed failure taxonomy
//! ([`ApiFailure`], [`FailureKind`]).

pub mod error;
pub mod result;

pub use error::{ApiFailure, FailureKind};
pub use result::ApiResult;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
