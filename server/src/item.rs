//! Domain types shared by the HTTP layer and the storage backends.

use serde::{Deserialize, Serialize};

/// A single to-do item as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

/// Request payload for creating an item. The id is always assigned by the
/// store; one supplied by the client is never honored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}

/// Request payload for updating an item.
///
/// A missing or null `name` keeps the stored value. `isComplete` is applied
/// unconditionally and reads as `false` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_wire_names() {
        let item = Item {
            id: 7,
            name: "Test".to_string(),
            is_complete: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Test");
        assert_eq!(json["isComplete"], false);
    }

    #[test]
    fn item_roundtrips_through_json() {
        let item = Item {
            id: 42,
            name: "Roundtrip".to_string(),
            is_complete: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn create_item_defaults_flag_to_false() {
        let input: CreateItem = serde_json::from_str(r#"{"name":"No flag"}"#).unwrap();
        assert_eq!(input.name, "No flag");
        assert!(!input.is_complete);
    }

    #[test]
    fn create_item_accepts_explicit_flag() {
        let input: CreateItem =
            serde_json::from_str(r#"{"name":"Done","isComplete":true}"#).unwrap();
        assert!(input.is_complete);
    }

    #[test]
    fn create_item_rejects_missing_name() {
        let result: Result<CreateItem, _> = serde_json::from_str(r#"{"isComplete":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_item_name_is_optional() {
        let input: UpdateItem = serde_json::from_str(r#"{"isComplete":true}"#).unwrap();
        assert!(input.name.is_none());
        assert!(input.is_complete);
    }

    #[test]
    fn update_item_null_name_reads_as_absent() {
        let input: UpdateItem =
            serde_json::from_str(r#"{"name":null,"isComplete":false}"#).unwrap();
        assert!(input.name.is_none());
    }

    #[test]
    fn update_item_omitted_flag_reads_as_false() {
        let input: UpdateItem = serde_json::from_str(r#"{"name":"Only name"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Only name"));
        assert!(!input.is_complete);
    }
}
