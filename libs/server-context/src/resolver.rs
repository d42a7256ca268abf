//! Canonical URIs for server API responses.

use std::sync::Arc;

use http::Uri;
use server_errors::{ApiError, UNEXPECTED_SERVER_ERROR};

use crate::config::{ServerContextConfig, TenantQualification};
use crate::constants::{ORGANIZATION_PATH_PREFIX, SERVER_API_PATH_COMPONENT, TENANT_PATH_PREFIX};
use crate::context::RequestContext;
use crate::url_builder::{UrlBuilder, UrlBuilderError};

const BUILD_RESPONSE_ERROR: &str = "Error while building response.";
const BODY_URL_ERROR: &str = "Server encountered an error while building URL for response body.";
const HEADER_URL_ERROR: &str =
    "Server encountered an error while building URL for response header.";

#[derive(Clone, Copy)]
enum UrlKind {
    Relative,
    Absolute,
}

/// Builds the URIs returned by server API handlers for a request context.
///
/// The resolver keeps no per-request state; share one instance across
/// handlers and pass the [`RequestContext`] of each request explicitly.
#[derive(Clone)]
pub struct ContextResolver {
    url_builder: Arc<dyn UrlBuilder>,
    tenancy: Arc<dyn TenantQualification>,
}

impl ContextResolver {
    /// Create a resolver over a URL builder and the tenant URL mode
    #[must_use]
    pub fn new(url_builder: Arc<dyn UrlBuilder>, tenancy: Arc<dyn TenantQualification>) -> Self {
        Self {
            url_builder,
            tenancy,
        }
    }

    /// Create a resolver whose tenant URL mode comes from `config`
    #[must_use]
    pub fn from_config(url_builder: Arc<dyn UrlBuilder>, config: ServerContextConfig) -> Self {
        Self::new(url_builder, Arc::new(config))
    }

    /// Relative URI for use in a response body,
    /// e.g. `/t/acme/api/server/users/42`.
    ///
    /// # Errors
    /// Returns an internal server error when the URL builder fails.
    pub fn build_relative_uri(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
    ) -> Result<Uri, ApiError> {
        self.build_uri(ctx, endpoint, UrlKind::Relative)
            .map_err(|e| internal_build_failure(BODY_URL_ERROR, e))
    }

    /// Fully qualified URI for use in a response header such as `Location`,
    /// e.g. `https://localhost:9443/o/org-1/api/server/users/42`.
    ///
    /// # Errors
    /// Returns an internal server error when the URL builder fails.
    pub fn build_absolute_uri(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
    ) -> Result<Uri, ApiError> {
        self.build_uri(ctx, endpoint, UrlKind::Absolute)
            .map_err(|e| internal_build_failure(HEADER_URL_ERROR, e))
    }

    /// Server API path for `endpoint` in the scope of `ctx`.
    ///
    /// An organization id always takes precedence. Otherwise the tenant
    /// segment is added here unless tenant-qualified URLs are enabled, in
    /// which case the URL builder injects it. `endpoint` is appended as is.
    #[must_use]
    pub fn path_context(&self, ctx: &RequestContext, endpoint: &str) -> String {
        if let Some(org_id) = ctx.organization_id().filter(|id| !id.trim().is_empty()) {
            tracing::debug!(organization_id = org_id, endpoint, "Organization scoped path");
            return format!(
                "{ORGANIZATION_PATH_PREFIX}{org_id}{SERVER_API_PATH_COMPONENT}{endpoint}"
            );
        }

        if self.tenancy.is_tenant_qualified_urls_enabled() {
            tracing::debug!(endpoint, "Tenant qualified path");
            format!("{SERVER_API_PATH_COMPONENT}{endpoint}")
        } else {
            let tenant_domain = ctx.tenant_domain();
            tracing::debug!(tenant_domain, endpoint, "Tenant scoped path");
            format!("{TENANT_PATH_PREFIX}{tenant_domain}{SERVER_API_PATH_COMPONENT}{endpoint}")
        }
    }

    fn build_uri(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        kind: UrlKind,
    ) -> Result<Uri, UrlBuilderError> {
        let path = self.path_context(ctx, endpoint);

        let mut builder = self.url_builder.create();
        builder.add_path(&path);
        let service_url = builder.build()?;

        let url = match kind {
            UrlKind::Relative => service_url.relative_public_url(),
            UrlKind::Absolute => service_url.absolute_public_url(),
        };
        let uri = Uri::try_from(url).map_err(|source| UrlBuilderError::InvalidUrl {
            url: url.to_owned(),
            source,
        })?;
        // `Uri` drops fragments silently; fail rather than return a different URL.
        if uri != url {
            return Err(UrlBuilderError::AlteredUrl {
                url: url.to_owned(),
            });
        }
        Ok(uri)
    }
}

fn internal_build_failure(description: &str, cause: UrlBuilderError) -> ApiError {
    ApiError::from_cause(
        &UNEXPECTED_SERVER_ERROR,
        Some(BUILD_RESPONSE_ERROR),
        description,
        cause,
    )
}
