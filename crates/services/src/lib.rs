#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod cues;
pub mod error;
pub mod quiz;

pub use app_services::AppServices;
pub use config::QuizConfig;
pub use cues::{CueSink, LogCueSink, NullCueSink};
pub use error::{AppServicesError, ConfigError};
pub use quiz::{
    CardView, Countdown, Grade, MenuEntry, ProgressView, QuizController, QuizHandle, QuizSnapshot,
    ResultView, TimerUrgency, TimerView, format_clock,
};
