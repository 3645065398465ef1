use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One-second ticker owned by a timed round.
///
/// Dropping it stops the ticks; there is no background task to cancel.
#[derive(Debug)]
pub struct Countdown {
    interval: Interval,
    seconds: u32,
}

impl Countdown {
    /// Start ticking; the first tick arrives one period from now.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn start(seconds: u32) -> Self {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, seconds }
    }

    /// Length the countdown was started with.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Wait for the next tick. Cancel safe.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
