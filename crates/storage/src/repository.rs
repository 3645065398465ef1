use async_trait::async_trait;
use quiz_core::model::HighScoreTable;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::mapping::{decode_scores, encode_scores};

/// Key the high-score table is stored under unless configured otherwise.
pub const DEFAULT_SCORE_NAMESPACE: &str = "kuis_kenabian_scores";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable home of the per-category high-score table.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Load the stored table. A missing entry yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read or decoded.
    async fn load_scores(&self) -> Result<HighScoreTable, StorageError>;

    /// Overwrite the stored table with `table`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be encoded or written.
    async fn save_scores(&self, table: &HighScoreTable) -> Result<(), StorageError>;
}

/// Simple in-memory key-value store for testing and prototyping.
///
/// Values are kept serialized, so loads go through the same decoding as the
/// `SQLite` adapter.
#[derive(Clone)]
pub struct InMemoryRepository {
    namespace: String,
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_SCORE_NAMESPACE)
    }

    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a raw value under the repository namespace, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, value: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(self.namespace.clone(), value.into());
        Ok(())
    }

    /// Raw value stored under the repository namespace.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn raw(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&self.namespace).cloned())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn load_scores(&self) -> Result<HighScoreTable, StorageError> {
        match self.raw()? {
            Some(raw) => decode_scores(&raw),
            None => Ok(HighScoreTable::new()),
        }
    }

    async fn save_scores(&self, table: &HighScoreTable) -> Result<(), StorageError> {
        let encoded = encode_scores(table)?;
        self.put_raw(encoded)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub scores: Arc<dyn ScoreRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let scores: Arc<dyn ScoreRepository> = Arc::new(InMemoryRepository::new());
        Self { scores }
    }
}
