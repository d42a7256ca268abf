//! Error types shared by the server API crates
//!
//! This crate holds pure data types for error responses, with HTTP framework
//! integration kept behind the `axum` feature. It includes:
//! - The JSON error body (`ErrorResponse`)
//! - Static catalog entries (`ErrDef`)
//! - `ApiError`, pairing a status classification with the body and its cause
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api_error;
pub mod catalog;
pub mod response;

pub use api_error::ApiError;
pub use catalog::{ErrDef, UNEXPECTED_SERVER_ERROR};
pub use response::ErrorResponse;

/// Id of the current `tracing` span, used to correlate an error body with logs.
///
/// This is a local span id, not a distributed (OpenTelemetry) trace id.
#[must_use]
pub fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}
