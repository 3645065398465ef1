use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CategoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category id cannot be empty")]
    EmptyId,

    #[error("category name cannot be empty")]
    EmptyName,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Presentation hints attached to a category.
///
/// The engine never reads these; they travel with the category so the
/// presentation layer can pick an icon and accent color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A topic category as listed on the menu screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    display: DisplayAttributes,
}

impl Category {
    /// Build a category, trimming the name.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyId` or `CategoryError::EmptyName` when either is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        display: DisplayAttributes,
    ) -> Result<Self, CategoryError> {
        let id = CategoryId::new(id)?;
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self { id, name, display })
    }

    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn display(&self) -> &DisplayAttributes {
        &self.display
    }
}
