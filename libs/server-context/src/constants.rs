/// Tenant domain of a request that carries no tenant of its own.
pub const SUPER_TENANT_DOMAIN_NAME: &str = "carbon.super";

/// Property keys used when a context is assembled from a keyed request store.
pub const TENANT_NAME_FROM_CONTEXT: &str = "TenantNameFromContext";
pub const ORGANIZATION_ID_FROM_CONTEXT: &str = "OrganizationIdFromContext";
pub const USERNAME_FROM_CONTEXT: &str = "UsernameFromContext";

pub const SERVER_API_PATH_COMPONENT: &str = "/api/server";
pub const TENANT_PATH_PREFIX: &str = "/t/";
pub const ORGANIZATION_PATH_PREFIX: &str = "/o/";
