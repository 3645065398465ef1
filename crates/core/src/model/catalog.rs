use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::model::category::{Category, CategoryError, DisplayAttributes};
use crate::model::ids::CategoryId;
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    #[error(transparent)]
    Category(#[from] CategoryError),
}

/// Read-only source of categories and their questions.
///
/// Loaded once at startup; the engine never mutates it. Question order is the
/// canonical order and is only ever copied before shuffling.
pub trait ContentStore: Send + Sync {
    /// All categories, in menu order.
    fn categories(&self) -> &[Category];

    /// Questions for a category, or `None` if the id is unknown.
    fn questions_for(&self, id: &CategoryId) -> Option<&[Question]>;

    fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories().iter().find(|category| category.id() == id)
    }

    fn contains(&self, id: &CategoryId) -> bool {
        self.questions_for(id).is_some()
    }
}

/// Serialized shape of one category together with its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: CategoryId,
    pub name: String,
    #[serde(flatten)]
    pub display: DisplayAttributes,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// In-memory content store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    questions: HashMap<CategoryId, Vec<Question>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from serialized entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for invalid categories or repeated ids.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CategoryEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            let category = Category::new(entry.id, entry.name, entry.display)?;
            catalog.insert(category, entry.questions)?;
        }
        Ok(catalog)
    }

    /// Append a category with its questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCategory` if the id is already present.
    pub fn insert(
        &mut self,
        category: Category,
        questions: Vec<Question>,
    ) -> Result<(), CatalogError> {
        if self.questions.contains_key(category.id()) {
            return Err(CatalogError::DuplicateCategory(category.id().clone()));
        }
        self.questions.insert(category.id().clone(), questions);
        self.categories.push(category);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl ContentStore for Catalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn questions_for(&self, id: &CategoryId) -> Option<&[Question]> {
        self.questions.get(id).map(Vec::as_slice)
    }
}
