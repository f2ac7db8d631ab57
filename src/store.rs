use crate::config::StoreConfig;
use crate::error::AcroError;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};
use tracing::info;

/// A store handle scoped to one logical operation.
///
/// Dropping the session returns the underlying connection to the pool, so
/// release happens on every exit path.
pub type Session = PoolConnection<Sqlite>;

/// Handle to the persistent store, owning the connection pool.
///
/// The store holds no entry state of its own; repository operations acquire a
/// [`Session`] per call and go through that.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens a connection pool against the configured store endpoint.
    ///
    /// Acquisition failure (endpoint unreachable, bad URL) propagates as
    /// [`AcroError::Connection`]; there is no retry here.
    pub async fn connect(config: &StoreConfig) -> Result<Self, AcroError> {
        let url = config.connection_url()?;

        let pool = SqlitePool::connect(&url)
            .await
            .map_err(|e| AcroError::Connection(e.to_string()))?;

        info!(%url, "connected to store");

        Ok(Store { pool })
    }

    /// Creates the base table and the synchronized full-text index.
    ///
    /// Idempotent; every statement is `IF NOT EXISTS` and executed
    /// independently, so bootstrap can run on every startup. The FTS table is
    /// an external-content index over `entries`, kept in sync by insert and
    /// delete triggers. Pair rows are never updated in place, so no update
    /// trigger exists.
    pub async fn bootstrap(&self) -> Result<(), AcroError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(key, value)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE VIRTUAL TABLE IF NOT EXISTS entry_fts USING fts5(key, value, content='entries', content_rowid='id')",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TRIGGER IF NOT EXISTS entries_ai AFTER INSERT ON entries BEGIN
             INSERT INTO entry_fts(rowid, key, value) VALUES (new.id, new.key, new.value);
            END",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TRIGGER IF NOT EXISTS entries_ad AFTER DELETE ON entries BEGIN
             INSERT INTO entry_fts(entry_fts, rowid, key, value) VALUES('delete', old.id, old.key, old.value);
            END",
        )
        .execute(&self.pool)
        .await?;

        info!("store schema ensured");

        Ok(())
    }

    /// Acquires a [`Session`] for the lifetime of one operation.
    pub async fn session(&self) -> Result<Session, AcroError> {
        Ok(self.pool.acquire().await?)
    }

    /// Closes the pool, waiting for checked-out sessions to drain.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
