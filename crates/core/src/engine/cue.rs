use crate::model::HighScoreTable;

const SKIP_HZ: u32 = 300;
const CORRECT_BASE_HZ: u32 = 600;
const CORRECT_STEP_HZ: u32 = 50;
const CORRECT_MAX_HZ: u32 = 1200;
const INCORRECT_HZ: u32 = 200;
const URGENCY_HZ: u32 = 880;
const TIMEOUT_HZ: u32 = 440;

/// Notification emitted alongside a transition.
///
/// The presentation layer decides how to render these (a tone, a color
/// flash) or whether to render them at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Skip,
    Correct { streak: u32 },
    Incorrect,
    /// Fired on every tick inside the final countdown window.
    Urgency { seconds_left: u32 },
    Timeout,
}

impl Cue {
    /// Suggested tone frequency in Hz.
    ///
    /// For `Correct` this rises with the streak and saturates at 1200 Hz.
    #[must_use]
    pub fn intensity(&self) -> u32 {
        match self {
            Cue::Skip => SKIP_HZ,
            Cue::Correct { streak } => CORRECT_BASE_HZ
                .saturating_add(streak.saturating_mul(CORRECT_STEP_HZ))
                .min(CORRECT_MAX_HZ),
            Cue::Incorrect => INCORRECT_HZ,
            Cue::Urgency { .. } => URGENCY_HZ,
            Cue::Timeout => TIMEOUT_HZ,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Cue::Skip => "skip",
            Cue::Correct { .. } => "correct",
            Cue::Incorrect => "incorrect",
            Cue::Urgency { .. } => "urgency",
            Cue::Timeout => "timeout",
        }
    }
}

/// Side effect requested by a transition, executed by the caller in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Cue(Cue),
    /// Overwrite the persisted table with this snapshot.
    PersistHighScores(HighScoreTable),
    StartCountdown { seconds: u32 },
    StopCountdown,
}
