use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::config::{Backend, Config};
use todo_server::store::{MemoryStore, SqliteStore};
use todo_server::SharedStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("resolving startup configuration")?;

    let store: SharedStore = match &config.backend {
        Backend::Memory => {
            tracing::info!("using in-memory item store");
            Arc::new(MemoryStore::new())
        }
        Backend::Sqlite(path) => {
            tracing::info!(path = %path, "using sqlite item store");
            Arc::new(SqliteStore::open(path).context("opening sqlite store")?)
        }
    };

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    todo_server::run(listener, store).await?;
    Ok(())
}
