//! The session engine: a state machine over [`QuizState`] driven by [`Intent`]s.
//!
//! Every transition is a plain method call that mutates the state in place and
//! returns the side effects (cues, persistence, countdown control) for the
//! caller to execute. Nothing here performs I/O.

mod cue;
mod intent;
mod queue;
mod state;

pub use cue::{Cue, Effect};
pub use intent::Intent;
pub use queue::ActiveQueue;
pub use state::{
    FinishReason, GameState, QuizState, Round, RoundResult, Screen, TransitionError,
    URGENCY_WINDOW_SECS,
};
