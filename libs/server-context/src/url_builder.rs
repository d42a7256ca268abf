//! URL builder collaborator.
//!
//! The builder owns the deployment details (host, proxy context path,
//! tenant-qualified URL mode). This crate only hands it a path and reads
//! back the public URLs.

use thiserror::Error;

/// Entry point of the URL builder service.
///
/// Implementations are shared across requests; every call to [`create`]
/// starts an independent builder.
///
/// [`create`]: UrlBuilder::create
pub trait UrlBuilder: Send + Sync {
    fn create(&self) -> Box<dyn ServiceUrlBuilder>;
}

/// A single URL being assembled.
pub trait ServiceUrlBuilder {
    /// Append `path` to the URL path.
    fn add_path(&mut self, path: &str);

    /// Resolve the public URLs for the assembled path.
    ///
    /// # Errors
    /// Returns [`UrlBuilderError`] when the URL cannot be built from the
    /// current configuration.
    fn build(self: Box<Self>) -> Result<ServiceUrl, UrlBuilderError>;
}

/// Public URLs resolved by a [`ServiceUrlBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl {
    relative_public_url: String,
    absolute_public_url: String,
}

impl ServiceUrl {
    #[must_use]
    pub fn new(
        relative_public_url: impl Into<String>,
        absolute_public_url: impl Into<String>,
    ) -> Self {
        Self {
            relative_public_url: relative_public_url.into(),
            absolute_public_url: absolute_public_url.into(),
        }
    }

    /// URL including the proxy context path, without scheme and host.
    #[must_use]
    pub fn relative_public_url(&self) -> &str {
        &self.relative_public_url
    }

    /// Fully qualified URL, e.g. `https://localhost:9443/t/acme/api/server/users`.
    #[must_use]
    pub fn absolute_public_url(&self) -> &str {
        &self.absolute_public_url
    }
}

#[derive(Debug, Error)]
pub enum UrlBuilderError {
    /// Deployment configuration needed to build the URL is missing or malformed.
    #[error("invalid URL builder configuration: {0}")]
    Configuration(String),

    /// The service URL context could not be resolved for this request.
    #[error("unresolved service URL context: {0}")]
    UnresolvedContext(String),

    /// The builder produced a URL that `http::Uri` cannot carry unchanged,
    /// e.g. one with a `#fragment`.
    #[error("built URL would not be returned unchanged: {url}")]
    AlteredUrl { url: String },

    /// The builder produced a string that is not a valid URI.
    #[error("built URL is not a valid URI: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
}
