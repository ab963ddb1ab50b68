//! Partial Update Sanitizer
//!
//! Builds the exact JSON payload for a PATCH request. A field left at its
//! outer `None` is never added to the payload, so the server value stays
//! untouched; an explicit inner `None` becomes a JSON `null`, which the
//! server reads as "clear this field".

use serde_json::{Map, Value};

/// Partial update for an [`Item`](super::Item)
///
/// `memo` and `image_url` are tri-state: outer `None` = leave untouched,
/// `Some(None)` = clear on the server, `Some(Some(s))` = set to `s`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    /// New title; empty after trimming is a no-op, not a clear
    pub name: Option<String>,
    /// New memo; empty after trimming is a no-op
    pub memo: Option<Option<String>>,
    /// New image URL; empty after trimming clears the image
    pub image_url: Option<Option<String>>,
    /// New completion status
    pub is_completed: Option<bool>,
}

impl ItemPatch {
    /// Normalize into the JSON object sent as the PATCH body
    ///
    /// Note the asymmetry: a blank `name` is dropped while a blank
    /// `image_url` turns into an explicit `null`. Callers depend on the
    /// distinction.
    pub fn sanitize(&self) -> Map<String, Value> {
        let mut payload = Map::new();

        if let Some(name) = &self.name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                payload.insert("name".to_string(), Value::String(trimmed.to_string()));
            }
        }

        if let Some(memo) = &self.memo {
            match memo {
                None => {
                    payload.insert("memo".to_string(), Value::Null);
                }
                Some(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        payload.insert("memo".to_string(), Value::String(trimmed.to_string()));
                    }
                }
            }
        }

        if let Some(image_url) = &self.image_url {
            match image_url {
                None => {
                    payload.insert("imageUrl".to_string(), Value::Null);
                }
                Some(url) => {
                    let trimmed = url.trim();
                    if trimmed.is_empty() {
                        payload.insert("imageUrl".to_string(), Value::Null);
                    } else {
                        payload
                            .insert("imageUrl".to_string(), Value::String(trimmed.to_string()));
                    }
                }
            }
        }

        if let Some(done) = self.is_completed {
            payload.insert("isCompleted".to_string(), Value::Bool(done));
        }

        payload
    }
}
