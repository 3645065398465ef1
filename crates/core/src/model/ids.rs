use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::model::category::CategoryError;

/// Identifier of a topic category, e.g. `"fiqh"`.
///
/// Category ids double as keys in the persisted high-score table, so they are
/// kept as the trimmed strings the content store provides. Never blank.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new `CategoryId`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyId` if nothing is left after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, CategoryError> {
        let id = id.into();
        let trimmed_len = id.trim().len();
        if trimmed_len == 0 {
            return Err(CategoryError::EmptyId);
        }
        if trimmed_len == id.len() {
            Ok(Self(id))
        } else {
            Ok(Self(id.trim().to_owned()))
        }
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryId {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryId {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for CategoryId {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({:?})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
