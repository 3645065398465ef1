use quiz_core::Cue;

/// Receiver for engine cues (tones, flashes).
///
/// Delivery is best effort; the engine never waits on or checks the result.
pub trait CueSink: Send + Sync {
    fn notify(&self, cue: Cue);
}

/// Writes each cue to the debug log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCueSink;

impl CueSink for LogCueSink {
    fn notify(&self, cue: Cue) {
        log::debug!("cue {} at {} Hz ({cue:?})", cue.kind(), cue.intensity());
    }
}

/// Drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCueSink;

impl CueSink for NullCueSink {
    fn notify(&self, _cue: Cue) {}
}
