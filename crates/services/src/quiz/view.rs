use serde::Serialize;

use quiz_core::model::{CategoryId, ContentStore, DisplayAttributes, SessionSettings, percentage};
use quiz_core::{FinishReason, GameState, QuizState, Round, RoundResult};

/// Countdown values at or below this are critical.
const CRITICAL_SECS: u32 = 15;
/// Countdown values below this are a warning.
const WARNING_SECS: u32 = 30;
/// Grades at or above this earn a celebration on the result screen.
const CELEBRATE_PERCENTAGE: u8 = 70;
const EXCELLENT_PERCENTAGE: u8 = 80;
const GOOD_PERCENTAGE: u8 = 60;

/// Presentation-agnostic snapshot of the whole quiz.
///
/// Rebuilt after every intent; the presentation layer renders it and keeps no
/// quiz state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub state: GameState,
    pub menu: Vec<MenuEntry>,
    pub settings: SessionSettings,
    pub category: Option<MenuEntry>,
    pub card: Option<CardView>,
    pub progress: Option<ProgressView>,
    pub timer: Option<TimerView>,
    pub result: Option<ResultView>,
}

/// A category as listed on the menu, with its best grade if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: CategoryId,
    pub name: String,
    pub display: DisplayAttributes,
    pub question_count: usize,
    pub best: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub prompt: String,
    pub answer: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub remaining: usize,
    pub total: u32,
    pub answered: u32,
    pub score: u32,
    pub streak: u32,
    /// Share of the round already resolved, `0..=100`.
    pub percent: u8,
    pub can_skip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerUrgency {
    Calm,
    Warning,
    Critical,
}

impl TimerUrgency {
    #[must_use]
    pub fn for_seconds(seconds_left: u32) -> Self {
        if seconds_left <= CRITICAL_SECS {
            Self::Critical
        } else if seconds_left < WARNING_SECS {
            Self::Warning
        } else {
            Self::Calm
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerView {
    pub seconds_left: u32,
    pub urgency: TimerUrgency,
}

/// Verdict tier shown with the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Every question answered correctly.
    Perfect,
    Excellent,
    Good,
    KeepPracticing,
}

impl Grade {
    #[must_use]
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            100.. => Self::Perfect,
            EXCELLENT_PERCENTAGE.. => Self::Excellent,
            GOOD_PERCENTAGE.. => Self::Good,
            _ => Self::KeepPracticing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub score: u32,
    pub total: u32,
    pub percentage: u8,
    pub grade: Grade,
    pub reason: FinishReason,
    pub timed_out: bool,
    pub perfect: bool,
    pub celebrate: bool,
    pub new_high_score: bool,
    pub best: Option<u8>,
}

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl QuizSnapshot {
    #[must_use]
    pub fn build<C: ContentStore + ?Sized>(state: &QuizState, content: &C) -> Self {
        let menu: Vec<MenuEntry> = content
            .categories()
            .iter()
            .map(|category| MenuEntry {
                id: category.id().clone(),
                name: category.name().to_owned(),
                display: category.display().clone(),
                question_count: content.questions_for(category.id()).map_or(0, <[_]>::len),
                best: state.high_scores().best(category.id()),
            })
            .collect();

        let category = state
            .selected_category()
            .and_then(|id| menu.iter().find(|entry| &entry.id == id).cloned());

        let round = state.round();
        Self {
            state: state.game_state(),
            category,
            settings: *state.settings(),
            card: round.and_then(card_view),
            progress: round.map(progress_view),
            timer: round.and_then(timer_view),
            result: state
                .result()
                .map(|result| result_view(result, state.high_scores().best(result.category()))),
            menu,
        }
    }
}

fn card_view(round: &Round) -> Option<CardView> {
    round.current().map(|question| CardView {
        prompt: question.prompt().to_owned(),
        answer: question.answer().to_owned(),
        revealed: round.card_revealed(),
    })
}

fn progress_view(round: &Round) -> ProgressView {
    let remaining = round.remaining();
    let answered = round
        .total_initial()
        .saturating_sub(u32::try_from(remaining).unwrap_or(u32::MAX));
    ProgressView {
        remaining,
        total: round.total_initial(),
        answered,
        score: round.score(),
        streak: round.streak(),
        percent: percentage(answered, round.total_initial()),
        can_skip: round.queue().can_skip(),
    }
}

fn timer_view(round: &Round) -> Option<TimerView> {
    round.time_remaining().map(|seconds_left| TimerView {
        seconds_left,
        urgency: TimerUrgency::for_seconds(seconds_left),
    })
}

fn result_view(result: &RoundResult, best: Option<u8>) -> ResultView {
    let timed_out = result.reason() == FinishReason::TimedOut;
    let percentage = result.percentage();
    ResultView {
        score: result.score(),
        total: result.total_initial(),
        percentage,
        grade: Grade::for_percentage(percentage),
        reason: result.reason(),
        timed_out,
        perfect: !timed_out && percentage == 100,
        celebrate: !timed_out && percentage >= CELEBRATE_PERCENTAGE,
        new_high_score: result.new_high_score(),
        best,
    }
}
