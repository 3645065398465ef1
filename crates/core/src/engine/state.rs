use rand::Rng;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::engine::cue::{Cue, Effect};
use crate::engine::intent::Intent;
use crate::engine::queue::ActiveQueue;
use crate::model::{
    CategoryId, ContentStore, HighScoreTable, Question, SessionSettings, SettingsPatch, percentage,
};

/// Ticks observing this many seconds or fewer (but more than one) emit an
/// urgency cue, which covers the last 15 seconds of the countdown.
pub const URGENCY_WINDOW_SECS: u32 = 16;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why an intent was not applied. The state is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("{intent} is not valid while in {state}")]
    InvalidTransition {
        intent: &'static str,
        state: GameState,
    },

    #[error("unknown category: {0}")]
    MissingCategory(CategoryId),

    #[error("category has no questions: {0}")]
    EmptyCategory(CategoryId),
}

//
// ─── STATES ────────────────────────────────────────────────────────────────────
//

/// Payload-free tag of the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    Menu,
    ConfiguringSettings,
    Playing,
    Finished,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Menu => "menu",
            GameState::ConfiguringSettings => "settings",
            GameState::Playing => "playing",
            GameState::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The last question in the queue was answered.
    Completed,
    /// The countdown ran out.
    TimedOut,
}

/// An in-progress round. Only exists while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    category: CategoryId,
    queue: ActiveQueue,
    total_initial: u32,
    score: u32,
    streak: u32,
    card_revealed: bool,
    time_remaining: Option<u32>,
}

impl Round {
    #[must_use]
    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    #[must_use]
    pub fn queue(&self) -> &ActiveQueue {
        &self.queue
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.queue.current()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn total_initial(&self) -> u32 {
        self.total_initial
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn card_revealed(&self) -> bool {
        self.card_revealed
    }

    /// Seconds left on the countdown, `None` when the timer is off.
    #[must_use]
    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }
}

/// Outcome of a finished round, shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    category: CategoryId,
    score: u32,
    total_initial: u32,
    percentage: u8,
    streak: u32,
    time_remaining: Option<u32>,
    reason: FinishReason,
    new_high_score: bool,
}

impl RoundResult {
    #[must_use]
    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_initial(&self) -> u32 {
        self.total_initial
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    #[must_use]
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    #[must_use]
    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    ConfiguringSettings { category: CategoryId },
    Playing(Round),
    Finished(RoundResult),
}

impl Screen {
    #[must_use]
    pub fn game_state(&self) -> GameState {
        match self {
            Screen::Menu => GameState::Menu,
            Screen::ConfiguringSettings { .. } => GameState::ConfiguringSettings,
            Screen::Playing(_) => GameState::Playing,
            Screen::Finished(_) => GameState::Finished,
        }
    }
}

//
// ─── QUIZ STATE ────────────────────────────────────────────────────────────────
//

/// Whole-application quiz state: the current screen plus data that outlives
/// a single round (settings and high scores).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    settings: SessionSettings,
    high_scores: HighScoreTable,
    screen: Screen,
}

impl QuizState {
    /// Start on the menu with default settings and a loaded high-score table.
    #[must_use]
    pub fn new(high_scores: HighScoreTable) -> Self {
        Self {
            settings: SessionSettings::default(),
            high_scores,
            screen: Screen::Menu,
        }
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.screen.game_state()
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&CategoryId> {
        match &self.screen {
            Screen::Menu => None,
            Screen::ConfiguringSettings { category } => Some(category),
            Screen::Playing(round) => Some(&round.category),
            Screen::Finished(result) => Some(&result.category),
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match &self.screen {
            Screen::Playing(round) => Some(round),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        match &self.screen {
            Screen::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Apply one intent.
    ///
    /// On success the state has moved and the returned effects should be
    /// executed in order. On error nothing changed.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when the intent is not defined for the
    /// current state or refers to an unknown or empty category.
    pub fn apply<C, R>(
        &mut self,
        intent: Intent,
        content: &C,
        rng: &mut R,
    ) -> Result<Vec<Effect>, TransitionError>
    where
        C: ContentStore + ?Sized,
        R: Rng + ?Sized,
    {
        match intent {
            Intent::SelectCategory(id) => self.select_category(id, content),
            Intent::UpdateSettings(patch) => self.update_settings(patch, content),
            Intent::Start => self.start(content, rng),
            Intent::Flip => self.flip(),
            Intent::Skip => self.skip(),
            Intent::Answer { correct } => self.answer(correct),
            Intent::Tick => self.tick(),
            Intent::Retry => self.retry(content, rng),
            Intent::GoHome => self.go_home(),
        }
    }

    fn invalid(&self, intent: &'static str) -> TransitionError {
        TransitionError::InvalidTransition {
            intent,
            state: self.game_state(),
        }
    }

    fn select_category<C: ContentStore + ?Sized>(
        &mut self,
        id: CategoryId,
        content: &C,
    ) -> Result<Vec<Effect>, TransitionError> {
        if !matches!(self.screen, Screen::Menu) {
            return Err(self.invalid("select_category"));
        }
        if !content.contains(&id) {
            return Err(TransitionError::MissingCategory(id));
        }
        self.screen = Screen::ConfiguringSettings { category: id };
        Ok(Vec::new())
    }

    fn update_settings<C: ContentStore + ?Sized>(
        &mut self,
        patch: SettingsPatch,
        content: &C,
    ) -> Result<Vec<Effect>, TransitionError> {
        let Screen::ConfiguringSettings { category } = &self.screen else {
            return Err(self.invalid("update_settings"));
        };
        let max_questions = content
            .questions_for(category)
            .map(|questions| u32::try_from(questions.len()).unwrap_or(u32::MAX));
        self.settings.apply_patch(patch, max_questions);
        Ok(Vec::new())
    }

    fn start<C, R>(&mut self, content: &C, rng: &mut R) -> Result<Vec<Effect>, TransitionError>
    where
        C: ContentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let Screen::ConfiguringSettings { category } = &self.screen else {
            return Err(self.invalid("start"));
        };
        let category = category.clone();
        self.begin_round(category, content, rng)
    }

    fn retry<C, R>(&mut self, content: &C, rng: &mut R) -> Result<Vec<Effect>, TransitionError>
    where
        C: ContentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let Screen::Finished(result) = &self.screen else {
            return Err(self.invalid("retry"));
        };
        let category = result.category.clone();
        self.begin_round(category, content, rng)
    }

    fn begin_round<C, R>(
        &mut self,
        category: CategoryId,
        content: &C,
        rng: &mut R,
    ) -> Result<Vec<Effect>, TransitionError>
    where
        C: ContentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(questions) = content.questions_for(&category) else {
            return Err(TransitionError::MissingCategory(category));
        };
        if questions.is_empty() {
            return Err(TransitionError::EmptyCategory(category));
        }

        let count = usize::try_from(self.settings.question_count()).unwrap_or(usize::MAX);
        let queue = ActiveQueue::sample(questions, count, rng);
        let total_initial = u32::try_from(queue.len()).unwrap_or(u32::MAX);
        let time_remaining = self.settings.countdown_seconds();

        let mut effects = Vec::new();
        if let Some(seconds) = time_remaining {
            effects.push(Effect::StartCountdown { seconds });
        }

        self.screen = Screen::Playing(Round {
            category,
            queue,
            total_initial,
            score: 0,
            streak: 0,
            card_revealed: false,
            time_remaining,
        });
        Ok(effects)
    }

    fn flip(&mut self) -> Result<Vec<Effect>, TransitionError> {
        let Screen::Playing(round) = &mut self.screen else {
            return Err(self.invalid("flip"));
        };
        round.card_revealed = true;
        Ok(Vec::new())
    }

    fn skip(&mut self) -> Result<Vec<Effect>, TransitionError> {
        let Screen::Playing(round) = &mut self.screen else {
            return Err(self.invalid("skip"));
        };
        // The last remaining card cannot be skipped; quietly do nothing.
        if !round.queue.skip() {
            return Ok(Vec::new());
        }
        round.card_revealed = false;
        round.streak = 0;
        Ok(vec![Effect::Cue(Cue::Skip)])
    }

    fn answer(&mut self, correct: bool) -> Result<Vec<Effect>, TransitionError> {
        let Screen::Playing(round) = &mut self.screen else {
            return Err(self.invalid("answer"));
        };

        let mut effects = Vec::new();
        if correct {
            round.score = round.score.saturating_add(1);
            round.streak = round.streak.saturating_add(1);
            effects.push(Effect::Cue(Cue::Correct {
                streak: round.streak,
            }));
        } else {
            round.streak = 0;
            effects.push(Effect::Cue(Cue::Incorrect));
        }

        round.queue.pop_front();
        if round.queue.is_empty() {
            effects.extend(self.finish(FinishReason::Completed));
        } else {
            round.card_revealed = false;
        }
        Ok(effects)
    }

    fn tick(&mut self) -> Result<Vec<Effect>, TransitionError> {
        let Screen::Playing(round) = &mut self.screen else {
            return Err(self.invalid("tick"));
        };
        // A tick that outlived its countdown.
        let Some(left) = round.time_remaining else {
            return Ok(Vec::new());
        };

        if left <= 1 {
            round.time_remaining = Some(0);
            let mut effects = vec![Effect::Cue(Cue::Timeout)];
            effects.extend(self.finish(FinishReason::TimedOut));
            return Ok(effects);
        }

        let mut effects = Vec::new();
        let seconds_left = left - 1;
        if left <= URGENCY_WINDOW_SECS {
            effects.push(Effect::Cue(Cue::Urgency { seconds_left }));
        }
        round.time_remaining = Some(seconds_left);
        Ok(effects)
    }

    fn go_home(&mut self) -> Result<Vec<Effect>, TransitionError> {
        let mut effects = Vec::new();
        match &self.screen {
            Screen::Menu => return Err(self.invalid("go_home")),
            Screen::Playing(round) if round.time_remaining.is_some() => {
                effects.push(Effect::StopCountdown);
            }
            _ => {}
        }
        self.settings.reset_for_menu();
        self.screen = Screen::Menu;
        Ok(effects)
    }

    /// Close the current round and record its grade.
    ///
    /// This is the only place the high-score table changes.
    fn finish(&mut self, reason: FinishReason) -> Vec<Effect> {
        let Screen::Playing(round) = std::mem::replace(&mut self.screen, Screen::Menu) else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        if round.time_remaining.is_some() {
            effects.push(Effect::StopCountdown);
        }

        let pct = percentage(round.score, round.total_initial);
        let new_high_score =
            round.total_initial > 0 && self.high_scores.record(&round.category, pct);
        if new_high_score {
            effects.push(Effect::PersistHighScores(self.high_scores.clone()));
        }

        self.screen = Screen::Finished(RoundResult {
            category: round.category,
            score: round.score,
            total_initial: round.total_initial,
            percentage: pct,
            streak: round.streak,
            time_remaining: round.time_remaining,
            reason,
            new_high_score,
        });
        effects
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(HighScoreTable::default())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, Category, DisplayAttributes};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn build_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (id, size) in [("fiqh", 12_usize), ("sirah", 3), ("single", 1), ("empty", 0)] {
            let category = Category::new(id, id.to_uppercase(), DisplayAttributes::default())
                .unwrap();
            let questions = (0..size)
                .map(|i| Question::new(format!("{id} Q{i}"), format!("{id} A{i}")).unwrap())
                .collect();
            catalog.insert(category, questions).unwrap();
        }
        catalog
    }

    struct Harness {
        state: QuizState,
        catalog: Catalog,
        rng: StdRng,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: QuizState::default(),
                catalog: build_catalog(),
                rng: StdRng::seed_from_u64(2025),
            }
        }

        fn apply(&mut self, intent: Intent) -> Result<Vec<Effect>, TransitionError> {
            self.state.apply(intent, &self.catalog, &mut self.rng)
        }

        fn ok(&mut self, intent: Intent) -> Vec<Effect> {
            self.apply(intent).unwrap()
        }

        fn start(&mut self, category: &str, patch: SettingsPatch) -> Vec<Effect> {
            self.ok(Intent::SelectCategory(CategoryId::new(category).unwrap()));
            self.ok(Intent::UpdateSettings(patch));
            self.ok(Intent::Start)
        }

        fn round(&self) -> &Round {
            self.state.round().unwrap()
        }

        fn prompts(&self) -> Vec<String> {
            self.round()
                .queue()
                .iter()
                .map(|q| q.prompt().to_owned())
                .collect()
        }
    }

    #[test]
    fn select_unknown_category_is_rejected() {
        let mut h = Harness::new();
        let err = h
            .apply(Intent::SelectCategory(CategoryId::new("aqidah").unwrap()))
            .unwrap_err();
        assert_eq!(err, TransitionError::MissingCategory(CategoryId::new("aqidah").unwrap()));
        assert_eq!(h.state.game_state(), GameState::Menu);
    }

    #[test]
    fn intents_outside_their_state_leave_state_untouched() {
        let mut h = Harness::new();
        let before = h.state.clone();
        for intent in [
            Intent::Start,
            Intent::Flip,
            Intent::Skip,
            Intent::Answer { correct: true },
            Intent::Tick,
            Intent::Retry,
            Intent::GoHome,
            Intent::UpdateSettings(SettingsPatch::use_timer(true)),
        ] {
            let err = h.apply(intent).unwrap_err();
            assert!(matches!(
                err,
                TransitionError::InvalidTransition {
                    state: GameState::Menu,
                    ..
                }
            ));
        }
        assert_eq!(h.state, before);
    }

    #[test]
    fn start_builds_queue_of_requested_size() {
        let mut h = Harness::new();
        let effects = h.start("fiqh", SettingsPatch::default());

        assert!(effects.is_empty());
        assert_eq!(h.state.game_state(), GameState::Playing);
        let round = h.round();
        assert_eq!(round.remaining(), 10);
        assert_eq!(round.total_initial(), 10);
        assert_eq!(round.score(), 0);
        assert_eq!(round.streak(), 0);
        assert!(!round.card_revealed());
        assert_eq!(round.time_remaining(), None);

        let unique: HashSet<_> = round.queue().iter().map(Question::prompt).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn total_initial_follows_category_size_when_smaller() {
        let mut h = Harness::new();
        h.start("sirah", SettingsPatch::question_count(20));
        assert_eq!(h.round().total_initial(), 3);
        assert_eq!(h.round().remaining(), 3);
    }

    #[test]
    fn starting_an_empty_category_is_rejected() {
        let mut h = Harness::new();
        h.ok(Intent::SelectCategory(CategoryId::new("empty").unwrap()));
        let err = h.apply(Intent::Start).unwrap_err();
        assert_eq!(err, TransitionError::EmptyCategory(CategoryId::new("empty").unwrap()));
        assert_eq!(h.state.game_state(), GameState::ConfiguringSettings);
    }

    #[test]
    fn timer_start_requests_countdown() {
        let mut h = Harness::new();
        let effects = h.start(
            "fiqh",
            SettingsPatch {
                use_timer: Some(true),
                duration_minutes: Some(1),
                question_count: None,
            },
        );
        assert_eq!(effects, vec![Effect::StartCountdown { seconds: 60 }]);
        assert_eq!(h.round().time_remaining(), Some(60));
    }

    #[test]
    fn flip_is_idempotent() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::default());
        h.ok(Intent::Flip);
        h.ok(Intent::Flip);
        assert!(h.round().card_revealed());
    }

    #[test]
    fn correct_answers_build_streak_and_score() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::default());

        for expected in 1..=4 {
            let effects = h.ok(Intent::Answer { correct: true });
            assert_eq!(
                effects,
                vec![Effect::Cue(Cue::Correct { streak: expected })]
            );
        }
        assert_eq!(h.round().streak(), 4);
        assert_eq!(h.round().score(), 4);

        let effects = h.ok(Intent::Answer { correct: false });
        assert_eq!(effects, vec![Effect::Cue(Cue::Incorrect)]);
        assert_eq!(h.round().streak(), 0);
        assert_eq!(h.round().score(), 4);
        assert_eq!(h.round().remaining(), 5);
    }

    #[test]
    fn answer_hides_the_next_card() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::default());
        h.ok(Intent::Flip);
        h.ok(Intent::Answer { correct: true });
        assert!(!h.round().card_revealed());
    }

    #[test]
    fn skip_rotates_queue_and_resets_streak() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::default());
        h.ok(Intent::Answer { correct: true });
        h.ok(Intent::Flip);

        let before = h.prompts();
        let effects = h.ok(Intent::Skip);
        assert_eq!(effects, vec![Effect::Cue(Cue::Skip)]);

        let mut expected = before[1..].to_vec();
        expected.push(before[0].clone());
        assert_eq!(h.prompts(), expected);
        assert_eq!(h.round().streak(), 0);
        assert_eq!(h.round().score(), 1);
        assert!(!h.round().card_revealed());
    }

    #[test]
    fn repeated_skips_cycle_back_to_original_order() {
        let mut h = Harness::new();
        h.start("sirah", SettingsPatch::default());
        let original = h.prompts();
        for _ in 0..original.len() {
            h.ok(Intent::Skip);
        }
        assert_eq!(h.prompts(), original);
    }

    #[test]
    fn skip_on_last_card_is_silent_noop() {
        let mut h = Harness::new();
        h.start("single", SettingsPatch::default());
        h.ok(Intent::Flip);
        let before = h.state.clone();

        let effects = h.ok(Intent::Skip);
        assert!(effects.is_empty());
        assert_eq!(h.state, before);
    }

    #[test]
    fn mixed_session_scores_seventy_percent() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::default());
        assert_eq!(h.round().remaining(), 10);

        let pattern = [true, true, false, true, true, false, true, true, true, false];
        let mut last = Vec::new();
        for correct in pattern {
            last = h.ok(Intent::Answer { correct });
        }

        assert_eq!(h.state.game_state(), GameState::Finished);
        let result = h.state.result().unwrap();
        assert_eq!(result.score(), 7);
        assert_eq!(result.streak(), 0);
        assert_eq!(result.percentage(), 70);
        assert_eq!(result.reason(), FinishReason::Completed);
        assert!(result.new_high_score());
        assert_eq!(h.state.high_scores().best(&CategoryId::new("fiqh").unwrap()), Some(70));
        assert!(last.contains(&Effect::PersistHighScores(h.state.high_scores().clone())));
        assert!(!last.contains(&Effect::StopCountdown));
    }

    #[test]
    fn perfect_round_is_one_hundred_percent() {
        let mut h = Harness::new();
        h.start("sirah", SettingsPatch::default());
        for _ in 0..3 {
            h.ok(Intent::Answer { correct: true });
        }
        assert_eq!(h.state.result().unwrap().percentage(), 100);
    }

    #[test]
    fn worse_round_keeps_previous_high_score() {
        let mut h = Harness::new();
        h.start("sirah", SettingsPatch::default());
        for _ in 0..3 {
            h.ok(Intent::Answer { correct: true });
        }

        let effects = h.ok(Intent::Retry);
        assert!(effects.is_empty());
        h.ok(Intent::Answer { correct: false });
        h.ok(Intent::Answer { correct: false });
        let effects = h.ok(Intent::Answer { correct: true });

        assert_eq!(effects, vec![Effect::Cue(Cue::Correct { streak: 1 })]);
        let result = h.state.result().unwrap();
        assert_eq!(result.percentage(), 33);
        assert!(!result.new_high_score());
        assert_eq!(h.state.high_scores().best(&CategoryId::new("sirah").unwrap()), Some(100));
    }

    #[test]
    fn retry_reuses_category_and_settings() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::question_count(5));
        for _ in 0..5 {
            h.ok(Intent::Answer { correct: false });
        }
        h.ok(Intent::Retry);

        assert_eq!(h.state.game_state(), GameState::Playing);
        assert_eq!(h.round().category().as_str(), "fiqh");
        assert_eq!(h.round().total_initial(), 5);
        assert_eq!(h.round().score(), 0);
    }

    #[test]
    fn retry_after_timeout_rearms_countdown() {
        let mut h = Harness::new();
        h.start(
            "sirah",
            SettingsPatch {
                use_timer: Some(true),
                duration_minutes: Some(1),
                question_count: None,
            },
        );
        for _ in 0..60 {
            h.ok(Intent::Tick);
        }
        assert_eq!(
            h.state.result().unwrap().reason(),
            FinishReason::TimedOut
        );

        let effects = h.ok(Intent::Retry);
        assert_eq!(effects, vec![Effect::StartCountdown { seconds: 60 }]);
        assert_eq!(h.state.game_state(), GameState::Playing);
        assert_eq!(h.round().time_remaining(), Some(60));
        assert_eq!(h.round().total_initial(), 3);
        assert_eq!(h.round().score(), 0);
        assert_eq!(h.round().streak(), 0);
    }

    #[test]
    fn countdown_expires_after_exact_tick_count() {
        let mut h = Harness::new();
        h.start(
            "fiqh",
            SettingsPatch {
                use_timer: Some(true),
                duration_minutes: Some(1),
                question_count: None,
            },
        );
        h.ok(Intent::Answer { correct: true });

        let mut urgency = 0;
        for tick in 1..=60 {
            assert_eq!(h.state.game_state(), GameState::Playing, "tick {tick}");
            let effects = h.ok(Intent::Tick);
            urgency += effects
                .iter()
                .filter(|e| matches!(e, Effect::Cue(Cue::Urgency { .. })))
                .count();
            if tick == 60 {
                assert_eq!(effects[0], Effect::Cue(Cue::Timeout));
                assert!(effects.contains(&Effect::StopCountdown));
            }
        }

        assert_eq!(urgency, 15);
        let result = h.state.result().unwrap();
        assert_eq!(result.reason(), FinishReason::TimedOut);
        assert_eq!(result.score(), 1);
        assert_eq!(result.time_remaining(), Some(0));

        let after = h.state.clone();
        assert!(h.apply(Intent::Tick).is_err());
        assert_eq!(h.state, after);
    }

    #[test]
    fn urgency_cue_reports_seconds_left() {
        let mut h = Harness::new();
        h.start(
            "fiqh",
            SettingsPatch {
                use_timer: Some(true),
                duration_minutes: Some(1),
                question_count: None,
            },
        );
        for _ in 0..44 {
            assert!(h.ok(Intent::Tick).is_empty());
        }
        assert_eq!(h.round().time_remaining(), Some(16));
        assert_eq!(
            h.ok(Intent::Tick),
            vec![Effect::Cue(Cue::Urgency { seconds_left: 15 })]
        );
    }

    #[test]
    fn tick_without_timer_is_ignored() {
        let mut h = Harness::new();
        h.start("fiqh", SettingsPatch::default());
        let before = h.state.clone();
        assert!(h.ok(Intent::Tick).is_empty());
        assert_eq!(h.state, before);
    }

    #[test]
    fn completing_timed_round_stops_countdown() {
        let mut h = Harness::new();
        h.start(
            "single",
            SettingsPatch {
                use_timer: Some(true),
                duration_minutes: Some(2),
                question_count: None,
            },
        );
        let effects = h.ok(Intent::Answer { correct: true });
        assert!(effects.contains(&Effect::StopCountdown));
        let result = h.state.result().unwrap();
        assert_eq!(result.reason(), FinishReason::Completed);
        assert_eq!(result.time_remaining(), Some(120));
    }

    #[test]
    fn go_home_resets_settings_but_keeps_duration_and_scores() {
        let mut h = Harness::new();
        h.start(
            "sirah",
            SettingsPatch {
                use_timer: Some(true),
                duration_minutes: Some(3),
                question_count: Some(2),
            },
        );
        h.ok(Intent::Answer { correct: true });
        h.ok(Intent::Answer { correct: true });
        assert_eq!(h.state.game_state(), GameState::Finished);

        let effects = h.ok(Intent::GoHome);
        assert!(effects.is_empty());
        assert_eq!(h.state.game_state(), GameState::Menu);
        assert_eq!(h.state.selected_category(), None);
        assert!(!h.state.settings().use_timer());
        assert_eq!(h.state.settings().question_count(), 10);
        assert_eq!(h.state.settings().duration_minutes(), 3);
        assert_eq!(h.state.high_scores().best(&CategoryId::new("sirah").unwrap()), Some(100));
    }

    #[test]
    fn go_home_mid_round_abandons_without_scoring() {
        let mut h = Harness::new();
        h.start("sirah", SettingsPatch::use_timer(true));
        h.ok(Intent::Answer { correct: true });

        let effects = h.ok(Intent::GoHome);
        assert_eq!(effects, vec![Effect::StopCountdown]);
        assert_eq!(h.state.game_state(), GameState::Menu);
        assert!(h.state.high_scores().is_empty());
    }

    #[test]
    fn go_home_from_settings_returns_to_menu() {
        let mut h = Harness::new();
        h.ok(Intent::SelectCategory(CategoryId::new("fiqh").unwrap()));
        h.ok(Intent::UpdateSettings(SettingsPatch::question_count(20)));
        h.ok(Intent::GoHome);
        assert_eq!(h.state.game_state(), GameState::Menu);
        assert_eq!(h.state.settings().question_count(), 10);
    }

    #[test]
    fn settings_question_count_clamped_to_category() {
        let mut h = Harness::new();
        h.ok(Intent::SelectCategory(CategoryId::new("fiqh").unwrap()));
        h.ok(Intent::UpdateSettings(SettingsPatch::question_count(50)));
        assert_eq!(h.state.settings().question_count(), 12);
    }
}
