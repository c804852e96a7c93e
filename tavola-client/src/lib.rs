//! Tavola Client - HTTP access layer for the restaurant backend
//!
//! Single point of contact with the remote REST service. Every public
//! operation resolves to an [`ApiResult`]: transport errors, non-JSON
//! payloads, and non-success status codes are all classified into the closed
//! failure taxonomy, and no error type ever escapes a call.

pub mod config;
pub mod http;
pub mod token;

pub use config::{ClientConfig, DEFAULT_TIMEOUT_MS};
pub use http::ApiClient;
pub use token::TokenStore;

// Re-export shared types for convenience
pub use shared::{ApiFailure, ApiResult, FailureKind};
