//! Item Entity
//!
//! Represents a to-do entry scoped to a tenant namespace. Instances are
//! always server-assigned; the client never fabricates an `id`.

use serde::{Deserialize, Serialize};

/// A to-do entry
///
/// Wire format is camelCase. `memo` and `image_url` distinguish "no value"
/// (`None`, wire `null` or absent) from a present string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, server-assigned and immutable
    pub id: u64,
    /// Namespace the item belongs to; supplied by configuration
    pub tenant_id: String,
    /// Title, non-empty after trimming
    pub name: String,
    /// Optional free-form note
    #[serde(default)]
    pub memo: Option<String>,
    /// Optional hosted image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Completion status
    pub is_completed: bool,
}

impl Item {
    /// Split a listing into (pending, completed), preserving server order
    pub fn partition_by_completion(items: Vec<Item>) -> (Vec<Item>, Vec<Item>) {
        items.into_iter().partition(|item| !item.is_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, done: bool) -> Item {
        Item {
            id,
            tenant_id: "team-a".to_string(),
            name: format!("task {}", id),
            memo: None,
            image_url: None,
            is_completed: done,
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let parsed: Item = serde_json::from_str(
            r#"{
                "id": 3,
                "tenantId": "team-a",
                "name": "buy milk",
                "memo": null,
                "imageUrl": "https://img.example/3.png",
                "isCompleted": true
            }"#,
        )
        .expect("valid item JSON");

        assert_eq!(parsed.id, 3);
        assert_eq!(parsed.tenant_id, "team-a");
        assert_eq!(parsed.memo, None);
        assert_eq!(parsed.image_url.as_deref(), Some("https://img.example/3.png"));
        assert!(parsed.is_completed);
    }

    #[test]
    fn test_deserialize_with_absent_optionals() {
        let parsed: Item = serde_json::from_str(
            r#"{"id": 1, "tenantId": "team-a", "name": "walk", "isCompleted": false}"#,
        )
        .expect("valid item JSON");

        assert_eq!(parsed.memo, None);
        assert_eq!(parsed.image_url, None);
    }

    #[test]
    fn test_partition_by_completion() {
        let items = vec![item(1, false), item(2, true), item(3, false)];
        let (pending, completed) = Item::partition_by_completion(items);

        assert_eq!(
            pending.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(completed.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }
}
