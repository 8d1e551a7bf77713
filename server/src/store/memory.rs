//! Process-lifetime in-memory store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ItemStore;
use crate::error::StoreError;
use crate::item::{CreateItem, Item, UpdateItem};

/// In-memory store: a locked map plus the id counter.
///
/// The counter lives under the same lock as the map, so two concurrent
/// creates can never mint the same id. All contents are lost when the
/// process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<i64, Item>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.items.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.items.get(&id).cloned())
    }

    async fn create(&self, input: CreateItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let item = Item {
            id: inner.next_id,
            name: input.name,
            is_complete: input.is_complete,
        };
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: i64, input: UpdateItem) -> Result<Option<Item>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.items.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = input.name {
            item.name = name;
        }
        item.is_complete = input.is_complete;
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.items.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
