//! `ApiError`: an error body paired with its HTTP status classification

use std::error::Error as StdError;

use http::StatusCode;
use thiserror::Error;

use crate::catalog::ErrDef;
use crate::response::ErrorResponse;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Terminal failure of a request-handling step.
///
/// Carries everything the HTTP layer needs to answer the client. The
/// underlying cause, when there is one, stays reachable through
/// [`std::error::Error::source`] and is never serialized.
#[derive(Debug, Error)]
#[error("{}", .response.description)]
pub struct ApiError {
    status: StatusCode,
    response: ErrorResponse,
    #[source]
    cause: Option<BoxedCause>,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, response: ErrorResponse) -> Self {
        Self {
            status,
            response,
            cause: None,
        }
    }

    /// Wrap `cause` into an error built from the catalog entry `def`.
    ///
    /// `message`, when given, replaces the catalog title as the user-facing
    /// summary. The failure is logged here, once, with its cause attached.
    #[must_use]
    pub fn from_cause<E>(
        def: &ErrDef,
        message: Option<&str>,
        description: &str,
        cause: E,
    ) -> Self
    where
        E: Into<BoxedCause>,
    {
        let cause: BoxedCause = cause.into();
        tracing::error!(code = def.code, error = %cause, "{description}");

        let mut response = def.as_response(description);
        if let Some(message) = message {
            response = response.with_message(message);
        }
        if let Some(trace_id) = crate::current_trace_id() {
            response = response.with_trace_id(trace_id);
        }

        Self {
            status: def.status_code(),
            response,
            cause: Some(cause),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn response(&self) -> &ErrorResponse {
        &self.response
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.response.code
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.response.description
    }

    /// Consume the error, keeping only the body sent to the client.
    pub fn into_response_body(self) -> ErrorResponse {
        self.response
    }
}

/// Axum integration: return `ApiError` straight from a handler
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        let mut resp = axum::Json(self.response).into_response();
        *resp.status_mut() = status;
        resp
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;

    use tracing_test::traced_test;

    use super::*;
    use crate::catalog::UNEXPECTED_SERVER_ERROR;

    #[derive(Debug, Error)]
    #[error("service url context missing")]
    struct MissingContext;

    #[test]
    fn new_has_no_cause() {
        let err = ApiError::new(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("BAD", "Bad request", "missing field"),
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing field");
        assert!(err.source().is_none());
    }

    #[test]
    #[traced_test]
    fn from_cause_keeps_source_and_logs() {
        let err = ApiError::from_cause(
            &UNEXPECTED_SERVER_ERROR,
            Some("Error while building response."),
            "building failed",
            MissingContext,
        );

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "UNEXPECTED_SERVER_ERROR");
        assert_eq!(err.response().message, "Error while building response.");
        assert_eq!(err.description(), "building failed");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("service url context missing")
        );
        assert!(logs_contain("building failed"));
        assert!(logs_contain("service url context missing"));
    }

    #[test]
    fn from_cause_without_message_uses_title() {
        let err = ApiError::from_cause(
            &UNEXPECTED_SERVER_ERROR,
            None,
            "building failed",
            MissingContext,
        );

        assert_eq!(err.response().message, UNEXPECTED_SERVER_ERROR.title);
        assert_eq!(err.description(), "building failed");
    }

    #[test]
    fn body_does_not_leak_cause() {
        let err = ApiError::from_cause(
            &UNEXPECTED_SERVER_ERROR,
            Some("Error while building response."),
            "building failed",
            MissingContext,
        );
        let json = serde_json::to_string(&err.into_response_body()).unwrap();
        assert!(!json.contains("service url context missing"));
    }

    #[cfg(feature = "axum")]
    #[test]
    fn into_response_uses_status() {
        use axum::response::IntoResponse;

        let err = ApiError::from_cause(
            &UNEXPECTED_SERVER_ERROR,
            Some("Error while building response."),
            "building failed",
            MissingContext,
        );
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
