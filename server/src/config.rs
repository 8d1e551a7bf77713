//! Startup configuration: listen port and storage target discovery.
//!
//! # Design
//! The server needs exactly one resolved connection string before a store
//! can be built. Discovery checks `DATABASE_URL`, then `CONNECTION_STRING`,
//! then the `connection_string` key of `todo.toml`. The literal value
//! `memory` selects the in-memory store; anything else is a SQLite database
//! path. Nothing resolving is a fatal startup condition.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "todo.toml";
const DEFAULT_PORT: u16 = 3000;

/// Storage backend selected by the resolved connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Process-lifetime in-memory store.
    Memory,
    /// SQLite database at the given path.
    Sqlite(String),
}

/// Fatal misconfiguration; the process must refuse to start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(
        "connection string not found; set DATABASE_URL or CONNECTION_STRING, \
         or add `connection_string` to {DEFAULT_CONFIG_FILE}"
    )]
    MissingConnectionString,

    #[error("unreadable config file {path}")]
    UnreadableConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    InvalidConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    connection_string: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: Backend,
}

impl Config {
    /// Resolve from the process environment and `todo.toml` in the working
    /// directory.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::resolve(|key| std::env::var(key).ok(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Resolve from an injected variable lookup and config file path.
    ///
    /// Empty values count as unset at every step, so an exported-but-blank
    /// variable falls through to the next source.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        config_file: &Path,
    ) -> Result<Self, StartupError> {
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| StartupError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let target = match lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .or_else(|| lookup("CONNECTION_STRING").filter(|v| !v.is_empty()))
        {
            Some(value) => Some(value),
            None => file_connection_string(config_file)?.filter(|v| !v.is_empty()),
        };
        let target = target.ok_or(StartupError::MissingConnectionString)?;

        let backend = if target == "memory" {
            Backend::Memory
        } else {
            Backend::Sqlite(target)
        };

        Ok(Self { port, backend })
    }
}

fn file_connection_string(path: &Path) -> Result<Option<String>, StartupError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| StartupError::UnreadableConfig {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: FileConfig =
        toml::from_str(&raw).map_err(|source| StartupError::InvalidConfig {
            path: path.display().to_string(),
            source,
        })?;
    Ok(parsed.connection_string)
}
