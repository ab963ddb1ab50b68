//! Item Operations
//!
//! Typed wrappers over the gateway, one per API operation. Each call is a
//! single round trip; the returned item is the server's post-operation
//! state and should replace whatever the caller holds locally.

use reqwest::Method;
use serde_json::Value;

use super::gateway::{ApiClient, RequestBody};
use crate::domain::{ApiResult, Item, ItemPatch};

/// Pagination for [`ApiClient::list_items`]
///
/// A parameter that is absent or not positive is left out of the request
/// entirely, the server then applies its defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListQuery {
    pub(crate) fn to_query_string(self) -> String {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            if page > 0 {
                pairs.push(format!("page={}", page));
            }
        }
        if let Some(size) = self.page_size {
            if size > 0 {
                pairs.push(format!("pageSize={}", size));
            }
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

impl ApiClient {
    /// List the tenant's items in server-determined order
    pub async fn list_items(&self, query: ListQuery) -> ApiResult<Vec<Item>> {
        let path = format!("{}{}", self.items_path(), query.to_query_string());
        self.request_json(Method::GET, &path, RequestBody::Empty)
            .await
    }

    /// Create an item; the server assigns the id
    ///
    /// The name is trimmed but not validated further, a blank name is the
    /// server's to reject.
    pub async fn create_item(&self, name: &str) -> ApiResult<Item> {
        let body = serde_json::json!({ "name": name.trim() });
        self.request_json(Method::POST, &self.items_path(), RequestBody::Json(body))
            .await
    }

    /// Fetch a single item by id
    pub async fn get_item(&self, id: u64) -> ApiResult<Item> {
        self.request_json(Method::GET, &self.item_path(id), RequestBody::Empty)
            .await
    }

    /// Apply a sanitized partial update and return the server's new state
    pub async fn update_item(&self, id: u64, patch: &ItemPatch) -> ApiResult<Item> {
        let payload = Value::Object(patch.sanitize());
        self.request_json(Method::PATCH, &self.item_path(id), RequestBody::Json(payload))
            .await
    }

    /// Delete an item; the server acknowledges with no content
    pub async fn delete_item(&self, id: u64) -> ApiResult<()> {
        self.request::<Value>(Method::DELETE, &self.item_path(id), RequestBody::Empty, None)
            .await?;
        Ok(())
    }

    /// Flip an item's completion flag
    pub async fn toggle_complete(&self, item: &Item) -> ApiResult<Item> {
        let patch = ItemPatch {
            is_completed: Some(!item.is_completed),
            ..ItemPatch::default()
        };
        self.update_item(item.id, &patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_empty() {
        assert_eq!(ListQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_zero_page_is_omitted() {
        let query = ListQuery {
            page: Some(0),
            page_size: None,
        };
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_positive_parameters_are_included() {
        let query = ListQuery {
            page: Some(2),
            page_size: Some(50),
        };
        assert_eq!(query.to_query_string(), "?page=2&pageSize=50");
    }

    #[test]
    fn test_page_size_alone() {
        let query = ListQuery {
            page: None,
            page_size: Some(10),
        };
        assert_eq!(query.to_query_string(), "?pageSize=10");
    }
}
