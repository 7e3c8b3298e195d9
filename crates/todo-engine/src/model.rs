//! Todo Records
//!
//! Data structures matching the remote service's JSON.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store
pub type ItemId = i64;

/// Placeholder id of an item that has not been persisted yet
pub const PROVISIONAL_ID: ItemId = -1;

/// A todo record (matches the remote service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

impl Item {
    /// Optimistic stand-in shown while `create` is pending
    pub fn provisional(owner_id: i64, title: &str) -> Self {
        Self {
            id: PROVISIONAL_ID,
            owner_id,
            title: title.to_string(),
            completed: false,
        }
    }

    pub fn is_provisional(&self) -> bool {
        self.id == PROVISIONAL_ID
    }
}

/// Body of a create request; the server assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

/// Partial update; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Trims the title in place. Returns false if it trims to empty.
    pub(crate) fn normalize(&mut self) -> bool {
        match self.title.as_mut() {
            Some(title) => {
                *title = title.trim().to_string();
                !title.is_empty()
            }
            None => true,
        }
    }

    /// Fill every field from `item` where the patch leaves it open
    pub(crate) fn merged_over(&self, item: &Item) -> ItemPatch {
        ItemPatch {
            title: Some(self.title.clone().unwrap_or_else(|| item.title.clone())),
            completed: Some(self.completed.unwrap_or(item.completed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn item_uses_service_field_names() {
        let item: Item = serde_json::from_value(json!({
            "id": 7,
            "userId": 690,
            "title": "Buy milk",
            "completed": true
        }))
        .expect("item should parse");

        assert_eq!(item.owner_id, 690);
        assert!(item.completed);
        assert_eq!(serde_json::to_value(&item).unwrap()["userId"], json!(690));
    }

    #[test]
    fn patch_skips_absent_fields() {
        let body = serde_json::to_value(ItemPatch::completed(true)).unwrap();
        assert_eq!(body, json!({ "completed": true }));
    }

    #[test]
    fn normalize_rejects_blank_titles() {
        let mut patch = ItemPatch::title("   ");
        assert!(!patch.normalize());

        let mut patch = ItemPatch::title("  Walk dog ");
        assert!(patch.normalize());
        assert_eq!(patch.title.as_deref(), Some("Walk dog"));
    }

    #[test]
    fn merge_fills_open_fields_from_item() {
        let item = Item {
            id: 3,
            owner_id: 1,
            title: "Read".into(),
            completed: false,
        };
        let merged = ItemPatch::completed(true).merged_over(&item);
        assert_eq!(merged.title.as_deref(), Some("Read"));
        assert_eq!(merged.completed, Some(true));
    }
}
