use crate::error::{AcroError, AcroResult};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable naming the store endpoint, e.g.
/// `sqlite:/var/lib/acro/acro.db?mode=rwc`.
pub const DATABASE_URL_VAR: &str = "ACRO_DATABASE_URL";

/// Connection settings for the persistent store.
///
/// The embedding process builds one of these at startup and hands it to
/// [`Store::connect`](crate::store::Store::connect). When no explicit URL is
/// configured, the store lives in a per-user data directory.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Full connection URL. Takes precedence over `database_path`.
    pub database_url: Option<String>,

    /// Path to a database file, used when `database_url` is unset.
    pub database_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Reads the configuration from the environment.
    ///
    /// Honors [`DATABASE_URL_VAR`]; everything else falls back to defaults.
    pub fn from_env() -> Self {
        StoreConfig {
            database_url: env::var(DATABASE_URL_VAR).ok().filter(|v| !v.is_empty()),
            database_path: None,
        }
    }

    /// Points the configuration at a specific database file.
    ///
    /// Used by tests to run against an isolated scratch store.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_url: None,
            database_path: Some(path.into()),
        }
    }

    /// Resolves the connection URL for this configuration.
    ///
    /// Order: explicit URL, explicit file path, then
    /// `{data_dir}/acro/acro.db` (created on demand).
    ///
    /// Returns [`AcroError::Config`] if no data directory can be determined,
    /// or [`AcroError::Io`] if the default directory cannot be created.
    pub fn connection_url(&self) -> AcroResult<String> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let path = match &self.database_path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };

        Ok(format!("sqlite:{}?mode=rwc", path.display()))
    }

    fn default_database_path() -> AcroResult<PathBuf> {
        let data = dirs::data_dir()
            .ok_or_else(|| AcroError::Config("user data directory not found".into()))?;

        let base = data.join("acro");
        if !base.exists() {
            fs::create_dir_all(&base)?;
        }

        Ok(base.join("acro.db"))
    }
}
