// decay.rs - Fixed-interval aging of emojis and bubbles
//
// Decay runs on its own 16ms clock, not the display refresh. Browsers drive
// it with setInterval; other hosts feed elapsed time into a DecayClock.

pub const DECAY_INTERVAL_MS: f64 = 16.0;

/// Turns arbitrary elapsed time into whole decay ticks
#[derive(Debug, Default)]
pub struct DecayClock {
    pending_ms: f64,
}

impl DecayClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and return how many ticks are now due
    pub fn due(&mut self, elapsed_ms: f64) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.pending_ms += elapsed_ms;
        }
        let ticks = (self.pending_ms / DECAY_INTERVAL_MS).floor();
        self.pending_ms -= ticks * DECAY_INTERVAL_MS;
        ticks as u32
    }

    pub fn reset(&mut self) {
        self.pending_ms = 0.0;
    }
}
