//! Wire DTOs for the items API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client crate carries no server dependencies. Integration tests catch
//! any schema drift between the two crates. Field names follow the wire
//! (`isComplete`) via serde renames.

use serde::{Deserialize, Serialize};

/// A single to-do item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

/// Request payload for creating a new item. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}

/// Request payload for updating an existing item.
///
/// `name` is serialized only when present — the server keeps the stored
/// value for an absent field. `isComplete` is always sent because the
/// server applies it unconditionally; a flag-only update serializes to
/// `{"isComplete": ...}`, the shape the browser client sends when toggling
/// completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}
