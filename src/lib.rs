//! # acro_core
//!
//! Storage core for an acronym lookup service: short keys mapped to sets of
//! free-text expansions, kept in SQLite with an FTS5 index for ranked fuzzy
//! search.
//!
//! ## Features
//!
//! - **Key→multivalue storage**: each key owns a set of value strings,
//!   modeled as `(key, value)` pairs with a uniqueness constraint
//! - **Transactional mutations**: adds and removals are all-or-nothing,
//!   rolled back automatically if the calling task is cancelled mid-flight
//! - **Synchronized full-text search**: an FTS5 index over keys and values,
//!   maintained by triggers and queried with bm25 ranking
//! - **Bounded browsing**: a random sample of at most 10 known keys
//! - **Tagged outcomes**: every operation reports `Ok`, `NoKey`, or
//!   `NoValues` as a value; only infrastructure failures surface as errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use acro_core::config::StoreConfig;
//! use acro_core::repo::sqlite::SqliteRepository;
//! use acro_core::repo::Repository;
//! use acro_core::store::Store;
//!
//! # async fn run() -> acro_core::AcroResult<()> {
//! let store = Store::connect(&StoreConfig::from_env()).await?;
//! store.bootstrap().await?;
//!
//! let repo = SqliteRepository::new(store);
//! repo.add("TLA", &["three letter acronym".to_string()]).await?;
//!
//! let outcome = repo.get("TLA").await?;
//! println!("{:?}", outcome.values);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`config`]**: store endpoint resolution (environment, explicit path,
//!   or a per-user default location)
//! - **[`store`]**: connection pool, per-operation sessions, and the
//!   idempotent schema bootstrap
//! - **[`repo`]**: the six-operation repository contract, its tagged
//!   [`Outcome`](repo::Outcome) model, and the SQLite implementation
//! - **[`error`]**: unified error handling for infrastructure failures
//!
//! The chat-transport layer that parses commands and renders replies lives
//! outside this crate; it consumes the repository contract and maps
//! outcomes to user-facing text. Likewise, installing a `tracing`
//! subscriber is the embedding process's job; this crate only emits events.

pub mod config;
pub mod error;
pub mod repo;
mod search;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{AcroError, AcroResult};
pub use repo::{Outcome, Repository, Status};
