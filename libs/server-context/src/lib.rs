#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod config;
pub mod constants;
pub mod context;
pub mod resolver;
pub mod url_builder;

pub use config::{ServerContextConfig, TenantQualification};
pub use context::{RequestContext, RequestContextBuilder};
pub use resolver::ContextResolver;
pub use url_builder::{ServiceUrl, ServiceUrlBuilder, UrlBuilder, UrlBuilderError};
