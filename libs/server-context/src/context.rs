use crate::constants::{
    ORGANIZATION_ID_FROM_CONTEXT, SUPER_TENANT_DOMAIN_NAME, TENANT_NAME_FROM_CONTEXT,
    USERNAME_FROM_CONTEXT,
};

/// `RequestContext` holds the identity a single inbound request is served for.
///
/// It is filled in once by the request pipeline and then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequestContext {
    tenant_domain: Option<String>,
    organization_id: Option<String>,
    username: Option<String>,
}

impl RequestContext {
    /// Create a new `RequestContext` builder
    #[must_use]
    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }

    /// Build a context from the properties of a keyed request store.
    ///
    /// Only the tenant, organization and username keys are read; any other
    /// property is ignored.
    #[must_use]
    pub fn from_properties<'a, I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        properties
            .into_iter()
            .fold(Self::builder(), |builder, (key, value)| match key {
                TENANT_NAME_FROM_CONTEXT => builder.tenant_domain(value),
                ORGANIZATION_ID_FROM_CONTEXT => builder.organization_id(value),
                USERNAME_FROM_CONTEXT => builder.username(value),
                _ => builder,
            })
            .build()
    }

    /// Tenant domain the request is served for.
    ///
    /// Falls back to [`SUPER_TENANT_DOMAIN_NAME`] when the pipeline set none.
    #[must_use]
    pub fn tenant_domain(&self) -> &str {
        self.tenant_domain
            .as_deref()
            .unwrap_or(SUPER_TENANT_DOMAIN_NAME)
    }

    /// Authenticated username, `None` for unauthenticated requests.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Organization id, `None` when the request is not organization-scoped.
    #[must_use]
    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }
}

/// Builder for [`RequestContext`]; unset fields stay absent
#[derive(Default)]
pub struct RequestContextBuilder {
    tenant_domain: Option<String>,
    organization_id: Option<String>,
    username: Option<String>,
}

impl RequestContextBuilder {
    /// Set the tenant domain the request is served for
    #[must_use]
    pub fn tenant_domain(mut self, tenant_domain: &str) -> Self {
        self.tenant_domain = Some(tenant_domain.to_owned());
        self
    }

    /// Set the organization id of an organization-scoped request
    #[must_use]
    pub fn organization_id(mut self, organization_id: &str) -> Self {
        self.organization_id = Some(organization_id.to_owned());
        self
    }

    /// Set the authenticated username
    #[must_use]
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_owned());
        self
    }

    /// Build the final `RequestContext`
    #[must_use]
    pub fn build(self) -> RequestContext {
        RequestContext {
            tenant_domain: self.tenant_domain,
            organization_id: self.organization_id,
            username: self.username,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_builder_full() {
        let ctx = RequestContext::builder()
            .tenant_domain("acme")
            .organization_id("org-123")
            .username("alice")
            .build();

        assert_eq!(ctx.tenant_domain(), "acme");
        assert_eq!(ctx.organization_id(), Some("org-123"));
        assert_eq!(ctx.username(), Some("alice"));
    }

    #[test]
    fn test_tenant_domain_defaults_to_super_tenant() {
        let ctx = RequestContext::builder().username("alice").build();

        assert_eq!(ctx.tenant_domain(), SUPER_TENANT_DOMAIN_NAME);
        assert_eq!(ctx.tenant_domain(), "carbon.super");
    }

    #[test]
    fn test_empty_context() {
        let ctx = RequestContext::default();

        assert_eq!(ctx.tenant_domain(), SUPER_TENANT_DOMAIN_NAME);
        assert_eq!(ctx.organization_id(), None);
        assert_eq!(ctx.username(), None);
        assert_eq!(ctx, RequestContext::builder().build());
    }

    #[test]
    fn test_explicit_empty_tenant_is_kept() {
        // Only an unset tenant falls back, an empty value is passed through.
        let ctx = RequestContext::builder().tenant_domain("").build();
        assert_eq!(ctx.tenant_domain(), "");
    }

    #[test]
    fn test_from_properties_reads_known_keys() {
        let ctx = RequestContext::from_properties([
            (TENANT_NAME_FROM_CONTEXT, "acme"),
            (ORGANIZATION_ID_FROM_CONTEXT, "org-1"),
            (USERNAME_FROM_CONTEXT, "bob"),
            ("SomethingElse", "ignored"),
        ]);

        assert_eq!(ctx.tenant_domain(), "acme");
        assert_eq!(ctx.organization_id(), Some("org-1"));
        assert_eq!(ctx.username(), Some("bob"));
    }

    #[test]
    fn test_from_properties_without_tenant() {
        let ctx = RequestContext::from_properties([(USERNAME_FROM_CONTEXT, "bob")]);

        assert_eq!(ctx.tenant_domain(), SUPER_TENANT_DOMAIN_NAME);
        assert_eq!(ctx.organization_id(), None);
    }

    #[test]
    fn test_request_context_serialize_deserialize() {
        let original = RequestContext::builder()
            .tenant_domain("acme")
            .username("alice")
            .build();

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: RequestContext = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, original);
        assert_eq!(deserialized.organization_id(), None);
    }
}
