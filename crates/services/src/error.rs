//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while reading configuration from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid QUIZ_SEED value: {raw}")]
    InvalidSeed { raw: String },
    #[error("QUIZ_SCORE_NAMESPACE cannot be empty")]
    EmptyNamespace,
    #[error("QUIZ_DB_URL cannot be empty")]
    EmptyDatabaseUrl,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
