//! JSON error body returned to API clients

use serde::{Deserialize, Serialize};

/// Error body carried by an [`crate::ApiError`].
///
/// `code` is machine readable, `message` is the short user-facing summary
/// and `description` explains this particular occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub description: String,
    /// Correlation id of the request that failed, when one was available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            description: description.into(),
            trace_id: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }
}
