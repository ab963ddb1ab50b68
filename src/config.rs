//! Client Configuration
//!
//! The base URL and tenant id are injected as an explicit struct at client
//! construction instead of being read from ambient process state on every
//! call. `from_env` exists as a convenience for binaries that do configure
//! themselves from the environment.

use crate::domain::{ApiError, ApiResult};

/// Environment variable holding the API base URL
pub const ENV_API_BASE: &str = "CHECKLIST_API_BASE";
/// Environment variable holding the tenant identifier
pub const ENV_TENANT_ID: &str = "CHECKLIST_TENANT_ID";

/// Connection settings for [`ApiClient`](crate::ApiClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Namespace all requests are scoped to
    pub tenant_id: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL + tenant pair
    ///
    /// Trailing slashes are stripped from the base URL. A missing tenant id
    /// is fatal here, no request can be formed without one.
    pub fn new(base_url: impl Into<String>, tenant_id: impl Into<String>) -> ApiResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let tenant_id = tenant_id.into().trim().to_string();

        if tenant_id.is_empty() {
            return Err(ApiError::Config("missing tenant id".to_string()));
        }
        if base_url.is_empty() {
            return Err(ApiError::Config("missing API base URL".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "API base URL must use http:// or https://, got {:?}",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            tenant_id,
        })
    }

    /// Read [`ENV_API_BASE`] and [`ENV_TENANT_ID`] from the environment
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var(ENV_API_BASE)
            .map_err(|_| ApiError::Config(format!("missing {}", ENV_API_BASE)))?;
        let tenant_id = std::env::var(ENV_TENANT_ID)
            .map_err(|_| ApiError::Config(format!("missing {}", ENV_TENANT_ID)))?;
        Self::new(base_url, tenant_id)
    }
}
