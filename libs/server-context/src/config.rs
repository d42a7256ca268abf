//! Configuration for server context resolution.

use figment::Figment;
use serde::Deserialize;

/// Deployment-wide tenant URL mode.
pub trait TenantQualification: Send + Sync {
    /// `true` when the URL builder injects the tenant segment itself.
    fn is_tenant_qualified_urls_enabled(&self) -> bool;
}

/// Server context configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerContextConfig {
    /// Tenant-qualified URL mode. When enabled, paths are built without the
    /// `/t/{tenant-domain}` segment.
    pub tenant_qualified_urls: bool,
}

impl ServerContextConfig {
    /// Section of the server configuration this struct is read from.
    pub const SECTION: &'static str = "server_context";

    /// Extract the configuration from its section of `figment`.
    ///
    /// A missing section yields the defaults.
    ///
    /// # Errors
    /// Returns an error when the section exists but does not deserialize,
    /// including unknown keys.
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        if !figment.contains(Self::SECTION) {
            tracing::debug!(
                section = Self::SECTION,
                "No server context section configured, using defaults"
            );
            return Ok(Self::default());
        }
        figment.extract_inner(Self::SECTION)
    }
}

impl TenantQualification for ServerContextConfig {
    fn is_tenant_qualified_urls_enabled(&self) -> bool {
        self.tenant_qualified_urls
    }
}
