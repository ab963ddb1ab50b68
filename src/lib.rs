//! Checklist API Client
//!
//! Layered architecture:
//! - domain: Core entities, patch sanitization and error types
//! - client: HTTP gateway and typed operations against the remote API
//!
//! All state lives on the server. Every operation issues exactly one HTTP
//! round trip and returns the server's representation; there is no local
//! cache, no retry and no request de-duplication.

pub mod client;
pub mod config;
pub mod domain;

pub use client::{ApiClient, ItemStore, ListQuery, MAX_IMAGE_BYTES};
pub use config::ApiConfig;
pub use domain::{ApiError, ApiResult, Item, ItemPatch};
