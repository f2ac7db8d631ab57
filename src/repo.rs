//! The repository contract and its tagged result model.
//!
//! Every operation resolves to an [`Outcome`]: validation-shaped failures
//! (`NoKey`, `NoValues`) are recovered into a status here, never raised as
//! errors across the repository boundary. Infrastructure failures (store
//! unreachable, transaction failure) propagate as
//! [`AcroError`](crate::error::AcroError) and the caller decides whether to
//! retry the whole operation.

use crate::error::AcroResult;
use async_trait::async_trait;

pub mod sqlite;

/// At most this many keys come back from `list_keys` and `search`.
pub const KEY_LIMIT: usize = 10;

/// Tagged status of a repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation took effect (or was an idempotent no-op).
    Ok,
    /// The requested key has no stored pairs, or a search matched nothing.
    NoKey,
    /// No values were supplied, or a removal asked for values that are not
    /// all present.
    NoValues,
}

/// Result of a repository operation: a [`Status`] plus the operation's
/// payload, empty for the mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub values: Vec<String>,
}

impl Outcome {
    pub fn ok(values: Vec<String>) -> Self {
        Outcome {
            status: Status::Ok,
            values,
        }
    }

    pub fn no_key() -> Self {
        Outcome {
            status: Status::NoKey,
            values: Vec::new(),
        }
    }

    pub fn no_values() -> Self {
        Outcome {
            status: Status::NoValues,
            values: Vec::new(),
        }
    }
}

/// The six repository operations consumed by the transport layer.
///
/// A formal trait rather than a concrete type so callers can substitute an
/// alternative backend (e.g. an in-memory double in transport-layer tests)
/// without touching call sites.
#[async_trait]
pub trait Repository {
    /// Returns the full value set stored under `key`.
    async fn get(&self, key: &str) -> AcroResult<Outcome>;

    /// Returns a bounded random sample of known keys.
    async fn list_keys(&self) -> AcroResult<Outcome>;

    /// Returns keys fuzzy-matching `term`, best match first.
    async fn search(&self, term: &str) -> AcroResult<Outcome>;

    /// Stores the given values under `key`, skipping ones already present.
    async fn add(&self, key: &str, values: &[String]) -> AcroResult<Outcome>;

    /// Removes exactly the given values from `key`, all or nothing.
    async fn remove(&self, key: &str, values: &[String]) -> AcroResult<Outcome>;

    /// Removes every value stored under `key`.
    async fn delete(&self, key: &str) -> AcroResult<Outcome>;
}
