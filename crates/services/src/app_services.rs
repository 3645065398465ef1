use std::sync::Arc;

use quiz_core::model::ContentStore;
use storage::repository::Storage;

use crate::config::QuizConfig;
use crate::cues::CueSink;
use crate::error::AppServicesError;
use crate::quiz::QuizController;

/// Assembles storage and content into ready-to-run quiz controllers.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    content: Arc<dyn ContentStore>,
    seed: Option<u64>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(
        config: &QuizConfig,
        content: Arc<dyn ContentStore>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(&config.database_url, &config.score_namespace).await?;
        log::info!(
            "score storage ready at {} under {}",
            config.database_url,
            config.score_namespace
        );
        Ok(Self {
            storage,
            content,
            seed: config.seed,
        })
    }

    /// Build services that keep scores in memory only.
    #[must_use]
    pub fn in_memory(content: Arc<dyn ContentStore>) -> Self {
        Self {
            storage: Storage::in_memory(),
            content,
            seed: None,
        }
    }

    /// Fix the shuffle seed of every controller built from here on.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn content(&self) -> Arc<dyn ContentStore> {
        Arc::clone(&self.content)
    }

    /// Bootstrap a controller on the configured storage.
    pub async fn controller(&self, cues: Arc<dyn CueSink>) -> QuizController {
        let controller = QuizController::bootstrap(
            Arc::clone(&self.content),
            Arc::clone(&self.storage.scores),
            cues,
        )
        .await;
        match self.seed {
            Some(seed) => controller.with_seed(seed),
            None => controller,
        }
    }
}
