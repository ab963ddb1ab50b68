//! Request Gateway
//!
//! Builds URLs against the configured base address and tenant segment,
//! attaches standard headers, classifies failures into [`ApiError`] and
//! decodes success responses. Exactly one network round trip per call, no
//! retries and no caching.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::domain::{ApiError, ApiResult};

/// Characters escaped in the tenant path segment.
/// Matches `encodeURIComponent`, which keeps `- _ . ~` unescaped.
const TENANT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Request payload variants the gateway distinguishes
pub(crate) enum RequestBody {
    Empty,
    Json(Value),
    /// No explicit content type; the transport sets the multipart boundary
    Multipart(reqwest::multipart::Form),
}

/// HTTP implementation of the item store
///
/// Cheap to clone, the underlying connection pool is shared. Safe to use
/// from concurrent tasks, but calls touching the same item are not
/// serialized; last response wins.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tenant_segment: String,
}

impl ApiClient {
    /// Build a client from validated configuration
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))?;
        let tenant_segment = utf8_percent_encode(&config.tenant_id, TENANT_SEGMENT).to_string();

        Ok(Self {
            http,
            base_url: config.base_url,
            tenant_segment,
        })
    }

    /// Build a client from [`ApiConfig::from_env`]
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Base URL requests are issued against, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn items_path(&self) -> String {
        format!("/api/{}/items", self.tenant_segment)
    }

    pub(crate) fn item_path(&self, id: u64) -> String {
        format!("/api/{}/items/{}", self.tenant_segment, id)
    }

    pub(crate) fn upload_path(&self) -> String {
        format!("/api/{}/images/upload", self.tenant_segment)
    }

    /// Issue one request and decode the response
    ///
    /// Returns `Ok(None)` on 204 No Content. Caller-supplied headers
    /// override the defaults set here.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        headers: Option<HeaderMap>,
    ) -> ApiResult<Option<T>> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        builder = match body {
            RequestBody::Empty => {
                builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            }
            RequestBody::Json(value) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        if let Some(extra) = headers {
            builder = builder.headers(extra);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Body read is best-effort; an unreadable body degrades to ""
            let body_text = response.text().await.unwrap_or_default();
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            log::error!(
                "API request failed: {} {} -> {} {}, body: {}",
                method,
                url,
                status.as_u16(),
                status_text,
                body_text
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text,
                body: body_text,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let decoded = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(decoded))
    }

    /// [`request`](Self::request) for operations that require a body
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ApiResult<T> {
        self.request(method, path, body, None)
            .await?
            .ok_or_else(|| {
                ApiError::Decode("expected a response body, got 204 No Content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str, tenant: &str) -> ApiClient {
        let config = ApiConfig::new(base, tenant).expect("valid config");
        ApiClient::new(config).expect("client")
    }

    #[test]
    fn test_paths_are_scoped_under_tenant() {
        let client = client("https://api.example.com", "team-a");
        assert_eq!(client.items_path(), "/api/team-a/items");
        assert_eq!(client.item_path(5), "/api/team-a/items/5");
        assert_eq!(client.upload_path(), "/api/team-a/images/upload");
    }

    #[test]
    fn test_tenant_segment_is_percent_encoded() {
        let client = client("https://api.example.com", "team a/7");
        assert_eq!(client.items_path(), "/api/team%20a%2F7/items");
    }

    #[test]
    fn test_unreserved_tenant_characters_stay_unescaped() {
        let client = client("https://api.example.com", "team-a_1.x~y");
        assert_eq!(client.items_path(), "/api/team-a_1.x~y/items");
    }

    #[test]
    fn test_base_url_keeps_config_normalization() {
        let client = client("https://api.example.com/", "team-a");
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
