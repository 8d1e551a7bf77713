//! SQLite-backed durable store.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::ItemStore;
use crate::error::StoreError;
use crate::item::{CreateItem, Item, UpdateItem};

/// Durable store over a single SQLite connection.
///
/// rusqlite is synchronous, so every operation hops onto the blocking pool
/// and takes the connection mutex there. The mutex also serializes writers,
/// which keeps the read-then-write inside `update` atomic per id.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `path` and migrate it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS items (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              name TEXT NOT NULL,
              is_complete INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().unwrap_or_else(PoisonError::into_inner);
            f(&guard)
        })
        .await?
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        is_complete: row.get(2)?,
    })
}

#[async_trait]
impl ItemStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, is_complete FROM items")?;
            let rows = stmt.query_map([], row_to_item)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
        .await
    }

    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        self.with_conn(move |conn| {
            Ok(conn
                .query_row(
                    "SELECT id, name, is_complete FROM items WHERE id = ?1",
                    params![id],
                    row_to_item,
                )
                .optional()?)
        })
        .await
    }

    async fn create(&self, input: CreateItem) -> Result<Item, StoreError> {
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO items (name, is_complete) VALUES (?1, ?2)",
                params![input.name, input.is_complete],
            )?;
            Ok(Item {
                id: conn.last_insert_rowid(),
                name: input.name,
                is_complete: input.is_complete,
            })
        })
        .await
    }

    async fn update(&self, id: i64, input: UpdateItem) -> Result<Option<Item>, StoreError> {
        self.with_conn(move |conn| {
            let existing = conn
                .query_row(
                    "SELECT id, name, is_complete FROM items WHERE id = ?1",
                    params![id],
                    row_to_item,
                )
                .optional()?;
            let Some(mut item) = existing else {
                return Ok(None);
            };
            if let Some(name) = input.name {
                item.name = name;
            }
            item.is_complete = input.is_complete;
            conn.execute(
                "UPDATE items SET name = ?1, is_complete = ?2 WHERE id = ?3",
                params![item.name, item.is_complete, item.id],
            )?;
            Ok(Some(item))
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.with_conn(move |conn| {
            let affected = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }
}
