use async_trait::async_trait;
use chrono::Utc;
use quiz_core::model::HighScoreTable;
use sqlx::Row;

use super::SqliteRepository;
use crate::mapping::{decode_scores, encode_scores};
use crate::repository::{ScoreRepository, StorageError};

#[async_trait]
impl ScoreRepository for SqliteRepository {
    async fn load_scores(&self) -> Result<HighScoreTable, StorageError> {
        let row = sqlx::query(
            r"
            SELECT value
            FROM kv_store
            WHERE namespace = ?1
            ",
        )
        .bind(&self.namespace)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(HighScoreTable::new());
        };

        let raw: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        decode_scores(&raw)
    }

    async fn save_scores(&self, table: &HighScoreTable) -> Result<(), StorageError> {
        let encoded = encode_scores(table)?;
        sqlx::query(
            r"
            INSERT INTO kv_store (namespace, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(namespace) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&self.namespace)
        .bind(encoded)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
