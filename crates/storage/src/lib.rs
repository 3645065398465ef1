#![forbid(unsafe_code)]

pub mod content;
mod mapping;
pub mod repository;
pub mod sqlite;

pub use content::{load_catalog, parse_catalog};
pub use repository::{
    DEFAULT_SCORE_NAMESPACE, InMemoryRepository, ScoreRepository, Storage, StorageError,
};
