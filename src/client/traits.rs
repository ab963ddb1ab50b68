//! Client Layer - Core Trait
//!
//! Defines the abstract interface for item data access. [`ApiClient`] is
//! the HTTP implementation; test doubles can stand in for consumers that
//! want to run without a backend.

use async_trait::async_trait;

use super::gateway::ApiClient;
use super::items::ListQuery;
use crate::domain::{ApiResult, Item, ItemPatch};

/// Store trait over the item operations
///
/// All operations are async and settle after exactly one backend round
/// trip in the HTTP implementation.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// List items in server-determined order
    async fn list(&self, query: ListQuery) -> ApiResult<Vec<Item>>;

    /// Create an item from a name
    async fn create(&self, name: &str) -> ApiResult<Item>;

    /// Fetch one item by id
    async fn get(&self, id: u64) -> ApiResult<Item>;

    /// Apply a partial update, returning the new server state
    async fn update(&self, id: u64, patch: &ItemPatch) -> ApiResult<Item>;

    /// Delete an item by id
    async fn delete(&self, id: u64) -> ApiResult<()>;

    /// Upload an image, returning its hosted URL
    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<String>;
}

#[async_trait]
impl ItemStore for ApiClient {
    async fn list(&self, query: ListQuery) -> ApiResult<Vec<Item>> {
        self.list_items(query).await
    }

    async fn create(&self, name: &str) -> ApiResult<Item> {
        self.create_item(name).await
    }

    async fn get(&self, id: u64) -> ApiResult<Item> {
        self.get_item(id).await
    }

    async fn update(&self, id: u64, patch: &ItemPatch) -> ApiResult<Item> {
        self.update_item(id, patch).await
    }

    async fn delete(&self, id: u64) -> ApiResult<()> {
        self.delete_item(id).await
    }

    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<String> {
        ApiClient::upload_image(self, file_name, bytes).await
    }
}
