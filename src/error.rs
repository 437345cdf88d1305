//! Unified error type for the firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Game logic itself cannot fail; only the peripherals around it can.

use defmt::Format;

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// Feedback queue full; the cue was dropped.
    FeedbackBusy,
}
