use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::CategoryId;

/// Session grade as a whole percentage in `[0, 100]`.
///
/// Rounds half up, so 1 of 8 correct (12.5%) becomes 13. A `total` of zero
/// grades as 0.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    let rounded = (score * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Best percentage ever reached per category.
///
/// Entries only move upwards; `record` is the single mutation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreTable {
    scores: BTreeMap<CategoryId, u8>,
}

impl HighScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from stored values, rounding them and capping at 100.
    ///
    /// Negative and non-finite values are dropped.
    #[must_use]
    pub fn from_persisted(entries: impl IntoIterator<Item = (CategoryId, f64)>) -> Self {
        let scores = entries
            .into_iter()
            .filter(|(_, value)| value.is_finite() && *value >= 0.0)
            .map(|(id, value)| (id, clamp_percentage(value)))
            .collect();
        Self { scores }
    }

    #[must_use]
    pub fn best(&self, id: &CategoryId) -> Option<u8> {
        self.scores.get(id).copied()
    }

    /// Store `pct` if it beats the current best (absent counts as 0).
    ///
    /// Returns `true` when the table changed.
    pub fn record(&mut self, id: &CategoryId, pct: u8) -> bool {
        let pct = pct.min(100);
        let current = self.best(id).unwrap_or(0);
        if pct > current {
            self.scores.insert(id.clone(), pct);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, u8)> {
        self.scores.iter().map(|(id, pct)| (id, *pct))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_percentage(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
