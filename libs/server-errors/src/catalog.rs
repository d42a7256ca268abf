//! Static error definitions

use http::StatusCode;

use crate::response::ErrorResponse;

/// Static error definition from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    pub status: u16,
    pub code: &'static str,
    /// Default user-facing message of bodies built from this definition.
    pub title: &'static str,
}

/// Catch-all for failures the client cannot act on.
pub const UNEXPECTED_SERVER_ERROR: ErrDef = ErrDef {
    status: 500,
    code: "UNEXPECTED_SERVER_ERROR",
    title: "Unexpected server error",
};

impl ErrDef {
    /// Status of this definition, `INTERNAL_SERVER_ERROR` when the code is invalid.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Build an error body using the catalog title as its message.
    #[inline]
    pub fn as_response(&self, description: impl Into<String>) -> ErrorResponse {
        ErrorResponse::new(self.code, self.title, description)
    }
}
