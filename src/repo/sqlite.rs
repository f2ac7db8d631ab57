//! SQLite-backed implementation of the [`Repository`] contract.
//!
//! Mutations are transactional: `add` writes each candidate value through an
//! `ON CONFLICT DO NOTHING` upsert inside one transaction, so concurrent
//! adds against the same key cannot lose values to a stale read. `remove`
//! reads the existing set and deletes within one transaction; a concurrent
//! add and remove on the same key resolve as last-committed-write-wins,
//! which is accepted behavior for this store. Dropping an uncommitted
//! transaction rolls it back, so a cancelled call never half-applies.

use crate::error::AcroResult;
use crate::repo::{KEY_LIMIT, Outcome, Repository};
use crate::search;
use crate::store::Store;
use async_trait::async_trait;
use sqlx::{Acquire, Row};
use std::collections::HashSet;
use tracing::debug;

pub struct SqliteRepository {
    store: Store,
}

impl SqliteRepository {
    pub fn new(store: Store) -> Self {
        SqliteRepository { store }
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    /// Returns every value stored under `key`, in insertion order.
    ///
    /// `NoKey` with an empty list when the key has no pairs.
    async fn get(&self, key: &str) -> AcroResult<Outcome> {
        let mut session = self.store.session().await?;

        let rows = sqlx::query("SELECT value FROM entries WHERE key = ? ORDER BY id")
            .bind(key)
            .fetch_all(&mut *session)
            .await?;

        if rows.is_empty() {
            return Ok(Outcome::no_key());
        }

        let values = rows.iter().map(|row| row.get(0)).collect();
        Ok(Outcome::ok(values))
    }

    /// Returns a random sample of at most [`KEY_LIMIT`] distinct keys.
    ///
    /// A browsing aid, not an enumeration: no ordering or distribution is
    /// guaranteed, and an empty store yields `Ok` with an empty list.
    async fn list_keys(&self) -> AcroResult<Outcome> {
        let mut session = self.store.session().await?;

        let rows = sqlx::query("SELECT DISTINCT key FROM entries ORDER BY RANDOM() LIMIT ?")
            .bind(KEY_LIMIT as i64)
            .fetch_all(&mut *session)
            .await?;

        let keys = rows.iter().map(|row| row.get(0)).collect();
        Ok(Outcome::ok(keys))
    }

    /// Fuzzy-matches `term` against keys and values, returning at most
    /// [`KEY_LIMIT`] distinct keys, best match first.
    ///
    /// Matching is case-insensitive. An empty or whitespace-only term
    /// matches nothing and yields `NoKey`, as does a term with no matches.
    async fn search(&self, term: &str) -> AcroResult<Outcome> {
        let Some(expr) = search::match_expr(term) else {
            return Ok(Outcome::no_key());
        };

        let mut session = self.store.session().await?;
        let keys = search::ranked_keys(&mut session, &expr, KEY_LIMIT as i64).await?;

        if keys.is_empty() {
            return Ok(Outcome::no_key());
        }

        Ok(Outcome::ok(keys))
    }

    /// Adds `values` under `key`, skipping values already present.
    ///
    /// All new pairs commit in one transaction. Re-adding existing values is
    /// an idempotent no-op and still reports `Ok`, so retried commands do
    /// not surface as failures. `NoValues` when `values` is empty.
    async fn add(&self, key: &str, values: &[String]) -> AcroResult<Outcome> {
        if values.is_empty() {
            return Ok(Outcome::no_values());
        }

        let mut session = self.store.session().await?;
        let mut tx = session.begin().await?;

        for value in values {
            sqlx::query(
                "INSERT INTO entries (key, value) VALUES (?, ?)
                 ON CONFLICT(key, value) DO NOTHING",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(key, count = values.len(), "add committed");

        Ok(Outcome::ok(Vec::new()))
    }

    /// Removes exactly `values` from `key`, all or nothing.
    ///
    /// `NoValues` when `values` is empty or not fully present (nothing is
    /// removed in that case); `NoKey` when the key has no pairs. Removing
    /// every existing value deletes the key entirely.
    async fn remove(&self, key: &str, values: &[String]) -> AcroResult<Outcome> {
        if values.is_empty() {
            return Ok(Outcome::no_values());
        }

        let mut session = self.store.session().await?;
        let mut tx = session.begin().await?;

        let rows = sqlx::query("SELECT value FROM entries WHERE key = ?")
            .bind(key)
            .fetch_all(&mut *tx)
            .await?;

        if rows.is_empty() {
            return Ok(Outcome::no_key());
        }

        let existing: HashSet<String> = rows.iter().map(|row| row.get(0)).collect();
        if !values.iter().all(|v| existing.contains(v)) {
            // Partial removal is disallowed; refuse the whole request.
            return Ok(Outcome::no_values());
        }

        let requested: HashSet<&String> = values.iter().collect();
        for value in requested {
            sqlx::query("DELETE FROM entries WHERE key = ? AND value = ?")
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        debug!(key, count = values.len(), "remove committed");

        Ok(Outcome::ok(Vec::new()))
    }

    /// Removes every pair stored under `key`.
    ///
    /// `NoKey` when none existed.
    async fn delete(&self, key: &str) -> AcroResult<Outcome> {
        let mut session = self.store.session().await?;

        let res = sqlx::query("DELETE FROM entries WHERE key = ?")
            .bind(key)
            .execute(&mut *session)
            .await?;

        if res.rows_affected() == 0 {
            return Ok(Outcome::no_key());
        }

        debug!(key, removed = res.rows_affected(), "delete committed");

        Ok(Outcome::ok(Vec::new()))
    }
}
