//! One-shot countdown that starts a fresh round after a win or loss.
//!
//! Armed when a round ends, fired once by the countdown expiry. While
//! armed the round is "ending": the main loop does not dispatch input.

use crate::config::ROUND_RESET_DELAY_MS;

#[derive(Clone, Debug, Default)]
pub struct RoundResetTimer {
    armed: bool,
}

impl RoundResetTimer {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Countdown length.
    pub const fn delay_ms(&self) -> u64 {
        ROUND_RESET_DELAY_MS
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start the countdown and suspend input. Returns `false` if it was
    /// already running.
    pub fn arm(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = true;
        !was_armed
    }

    /// Expiry handler entry: disarms before anything else happens.
    ///
    /// Returns `true` only for the first expiry after an `arm()`, so a
    /// stray second expiry does no work.
    pub fn fire(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        was_armed
    }
}
