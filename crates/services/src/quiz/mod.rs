mod controller;
mod countdown;
mod runtime;
mod view;

pub use controller::QuizController;
pub use countdown::Countdown;
pub use runtime::QuizHandle;
pub use view::{
    CardView, Grade, MenuEntry, ProgressView, QuizSnapshot, ResultView, TimerUrgency, TimerView,
    format_clock,
};
