use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use crate::model::Question;

/// Questions still to be resolved in the current round, front first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveQueue {
    items: VecDeque<Question>,
}

impl ActiveQueue {
    /// Shuffle a copy of `questions` and keep the first `count`.
    ///
    /// The shuffle is an unbiased Fisher-Yates pass; the source slice keeps its
    /// canonical order.
    pub fn sample<R: Rng + ?Sized>(questions: &[Question], count: usize, rng: &mut R) -> Self {
        let mut pool = questions.to_vec();
        pool.shuffle(rng);
        pool.truncate(count);
        Self { items: pool.into() }
    }

    #[must_use]
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            items: questions.into(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.items.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `skip` would do anything.
    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.items.len() > 1
    }

    /// Move the front question to the back.
    ///
    /// Returns `false` and leaves the queue untouched when one or zero
    /// questions remain.
    pub fn skip(&mut self) -> bool {
        if !self.can_skip() {
            return false;
        }
        self.items.rotate_left(1);
        true
    }

    pub fn pop_front(&mut self) -> Option<Question> {
        self.items.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.items.iter()
    }
}
