#![forbid(unsafe_code)]

pub mod engine;
pub mod model;

pub use engine::{
    ActiveQueue, Cue, Effect, FinishReason, GameState, Intent, QuizState, Round, RoundResult,
    Screen, TransitionError,
};
