mod catalog;
mod category;
mod high_score;
mod ids;
mod question;
mod settings;

pub use catalog::{Catalog, CatalogError, CategoryEntry, ContentStore};
pub use category::{Category, CategoryError, DisplayAttributes};
pub use high_score::{HighScoreTable, percentage};
pub use ids::CategoryId;
pub use question::{Question, QuestionError};
pub use settings::{
    DEFAULT_DURATION_MINUTES, DEFAULT_QUESTION_COUNT, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
    MIN_QUESTION_COUNT, SessionSettings, SettingsPatch,
};
