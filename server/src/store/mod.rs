//! Storage backends for the item collection.
//!
//! The HTTP layer owns no item state; everything lives behind [`ItemStore`]
//! so the in-memory and SQLite backends interchange at startup.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::item::{CreateItem, Item, UpdateItem};

/// Canonical owner of the item collection and id assignment.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// All items, in no particular order.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Look up a single item; `None` when the id does not exist.
    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Store a new item under a freshly assigned unique id and return it.
    async fn create(&self, input: CreateItem) -> Result<Item, StoreError>;

    /// Apply `input` to an existing item; `None` when the id does not exist.
    ///
    /// A missing `name` keeps the stored value; `is_complete` is always
    /// overwritten.
    async fn update(&self, id: i64, input: UpdateItem) -> Result<Option<Item>, StoreError>;

    /// Remove an item; `false` when the id does not exist.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Probe backend connectivity.
    async fn ping(&self) -> Result<(), StoreError>;
}
