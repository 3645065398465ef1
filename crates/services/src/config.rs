use std::path::{Path, PathBuf};

use storage::repository::DEFAULT_SCORE_NAMESPACE;

use crate::error::ConfigError;

const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";

/// Runtime configuration for the quiz services.
///
/// Environment:
/// - `QUIZ_DB_URL`: `SQLite` URL or path (default `sqlite://quiz.sqlite3`)
/// - `QUIZ_SCORE_NAMESPACE`: key the high-score table is stored under
/// - `QUIZ_SEED`: fixed seed for question shuffling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub database_url: String,
    pub score_namespace: String,
    pub seed: Option<u64>,
}

impl QuizConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match lookup("QUIZ_DB_URL") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyDatabaseUrl),
            Some(raw) => normalize_sqlite_url(raw),
            None => DEFAULT_DB_URL.to_owned(),
        };

        let score_namespace = match lookup("QUIZ_SCORE_NAMESPACE") {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyNamespace);
                }
                trimmed.to_owned()
            }
            None => DEFAULT_SCORE_NAMESPACE.to_owned(),
        };

        let seed = lookup("QUIZ_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { raw })
            })
            .transpose()?;

        Ok(Self {
            database_url,
            score_namespace,
            seed,
        })
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DB_URL.to_owned(),
            score_namespace: DEFAULT_SCORE_NAMESPACE.to_owned(),
            seed: None,
        }
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}
