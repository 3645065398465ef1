#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use quiz_core::Cue;
use quiz_core::model::{Catalog, Category, ContentStore, DisplayAttributes, Question};
use services::CueSink;

/// Catalog with `fiqh` (20 questions) and `sirah` (3 questions).
pub fn catalog() -> Arc<dyn ContentStore> {
    let mut catalog = Catalog::new();
    for (id, name, count) in [("fiqh", "Fiqh", 20), ("sirah", "Sirah", 3)] {
        let display = DisplayAttributes {
            icon: None,
            color: Some("#10b981".into()),
        };
        let category = Category::new(id, name, display).unwrap();
        let questions = (0..count)
            .map(|i| Question::new(format!("{id} question {i}"), format!("{id} answer {i}")).unwrap())
            .collect();
        catalog.insert(category, questions).unwrap();
    }
    Arc::new(catalog)
}

/// Remembers every cue it receives.
#[derive(Default)]
pub struct RecordingCues {
    cues: Mutex<Vec<Cue>>,
}

impl RecordingCues {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Cue) -> bool) -> usize {
        self.cues.lock().unwrap().iter().filter(|cue| pred(cue)).count()
    }
}

impl CueSink for RecordingCues {
    fn notify(&self, cue: Cue) {
        self.cues.lock().unwrap().push(cue);
    }
}
