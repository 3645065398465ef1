use crate::model::{CategoryId, SettingsPatch};

/// A user action or timer tick fed into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectCategory(CategoryId),
    UpdateSettings(SettingsPatch),
    Start,
    Flip,
    Skip,
    Answer { correct: bool },
    Tick,
    Retry,
    GoHome,
}

impl Intent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SelectCategory(_) => "select_category",
            Intent::UpdateSettings(_) => "update_settings",
            Intent::Start => "start",
            Intent::Flip => "flip",
            Intent::Skip => "skip",
            Intent::Answer { .. } => "answer",
            Intent::Tick => "tick",
            Intent::Retry => "retry",
            Intent::GoHome => "go_home",
        }
    }
}
