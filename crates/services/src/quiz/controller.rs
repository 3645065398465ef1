use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{ContentStore, HighScoreTable};
use quiz_core::{Effect, Intent, QuizState};
use storage::repository::ScoreRepository;

use super::countdown::Countdown;
use super::view::QuizSnapshot;
use crate::cues::CueSink;

/// Owns the single quiz session of the process and executes engine effects.
///
/// The controller is the only writer of both the state and the high-score
/// store. Intents are processed one at a time; the countdown is an owned
/// value that exists only while a timed round is being played.
pub struct QuizController {
    state: QuizState,
    content: Arc<dyn ContentStore>,
    scores: Arc<dyn ScoreRepository>,
    cues: Arc<dyn CueSink>,
    rng: StdRng,
    countdown: Option<Countdown>,
}

impl QuizController {
    /// Load the high-score table once and start on the menu.
    ///
    /// A failed load is logged and treated as an empty table.
    pub async fn bootstrap(
        content: Arc<dyn ContentStore>,
        scores: Arc<dyn ScoreRepository>,
        cues: Arc<dyn CueSink>,
    ) -> Self {
        let high_scores = match scores.load_scores().await {
            Ok(table) => table,
            Err(err) => {
                log::warn!("high scores unavailable, starting empty: {err}");
                HighScoreTable::new()
            }
        };
        log::info!(
            "quiz ready with {} categories and {} stored high scores",
            content.categories().len(),
            high_scores.len()
        );

        Self {
            state: QuizState::new(high_scores),
            content,
            scores,
            cues,
            rng: StdRng::from_os_rng(),
            countdown: None,
        }
    }

    /// Use a fixed seed for question shuffling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::build(&self.state, self.content.as_ref())
    }

    /// Whether a countdown is currently running.
    #[must_use]
    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_some()
    }

    /// Apply one intent and execute its effects.
    ///
    /// Intents that are not valid right now are logged and ignored; the
    /// returned snapshot then equals the previous one.
    pub async fn dispatch(&mut self, intent: Intent) -> QuizSnapshot {
        let name = intent.name();
        match self
            .state
            .apply(intent, self.content.as_ref(), &mut self.rng)
        {
            Ok(effects) => self.execute(effects).await,
            Err(err) => log::debug!("ignored {name}: {err}"),
        }
        self.snapshot()
    }

    /// Wait for the next countdown tick.
    ///
    /// Never resolves while no countdown is running.
    pub async fn next_tick(&mut self) {
        match self.countdown.as_mut() {
            Some(countdown) => countdown.tick().await,
            None => std::future::pending().await,
        }
    }

    async fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Cue(cue) => self.cues.notify(cue),
                Effect::PersistHighScores(table) => {
                    // The in-memory table stays authoritative either way.
                    if let Err(err) = self.scores.save_scores(&table).await {
                        log::warn!("failed to persist high scores: {err}");
                    }
                }
                Effect::StartCountdown { seconds } => {
                    log::debug!("countdown started: {seconds}s");
                    self.countdown = Some(Countdown::start(seconds));
                }
                Effect::StopCountdown => {
                    if self.countdown.take().is_some() {
                        log::debug!("countdown stopped");
                    }
                }
            }
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("state", &self.state.game_state())
            .field("selected_category", &self.state.selected_category())
            .field("counting_down", &self.countdown.is_some())
            .finish_non_exhaustive()
    }
}
