use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_MINUTES: u32 = 5;
pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const MIN_QUESTION_COUNT: u32 = 1;

/// Per-session options chosen on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    use_timer: bool,
    duration_minutes: u32,
    question_count: u32,
}

/// Partial update coming from the settings screen.
///
/// Numeric fields are signed so raw user input can be clamped rather than
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub use_timer: Option<bool>,
    pub duration_minutes: Option<i64>,
    pub question_count: Option<i64>,
}

impl SettingsPatch {
    #[must_use]
    pub fn use_timer(value: bool) -> Self {
        Self {
            use_timer: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn duration_minutes(value: i64) -> Self {
        Self {
            duration_minutes: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn question_count(value: i64) -> Self {
        Self {
            question_count: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.use_timer.is_none() && self.duration_minutes.is_none() && self.question_count.is_none()
    }
}

impl SessionSettings {
    #[must_use]
    pub fn use_timer(&self) -> bool {
        self.use_timer
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Countdown length in seconds, or `None` when the timer is off.
    #[must_use]
    pub fn countdown_seconds(&self) -> Option<u32> {
        self.use_timer.then(|| self.duration_minutes.saturating_mul(60))
    }

    /// Merge a patch, clamping each numeric field into its valid range.
    ///
    /// `max_questions` caps the question count (typically the size of the
    /// selected category); it never pushes the count below
    /// `MIN_QUESTION_COUNT`.
    pub fn apply_patch(&mut self, patch: SettingsPatch, max_questions: Option<u32>) {
        if let Some(use_timer) = patch.use_timer {
            self.use_timer = use_timer;
        }
        if let Some(minutes) = patch.duration_minutes {
            self.duration_minutes = clamp_to_u32(
                minutes,
                MIN_DURATION_MINUTES,
                MAX_DURATION_MINUTES,
            );
        }
        if let Some(count) = patch.question_count {
            let upper = max_questions.unwrap_or(u32::MAX).max(MIN_QUESTION_COUNT);
            self.question_count = clamp_to_u32(count, MIN_QUESTION_COUNT, upper);
        }
    }

    /// Return to menu defaults. The chosen duration survives.
    pub fn reset_for_menu(&mut self) {
        self.use_timer = false;
        self.question_count = DEFAULT_QUESTION_COUNT;
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            use_timer: false,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

fn clamp_to_u32(value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    u32::try_from(clamped).unwrap_or(max)
}
