//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and game rules
//! live here so they can be tuned in one place.

// Game rules

/// Dictionary the secret word is drawn from.
pub const WORD_LIST: [&str; 5] = ["ARDUINO", "DISPLAY", "ELECTRON", "MICROBIT", "CODARE"];

/// Capacity of the hidden and guessed words.
pub const MAX_WORD_LEN: usize = 9;

/// Number of letters offered to the player each round.
pub const CANDIDATE_COUNT: usize = 10;

/// Incorrect guesses allowed before the round is lost.
pub const MAX_MISTAKES: u8 = 4;

/// Shown in place of letters that are not revealed yet.
pub const PLACEHOLDER: u8 = b'_';

// Timing

/// Period of the debounce timer (ms).
pub const DEBOUNCE_TICK_MS: u64 = 16;

/// Debounce timer passes before the pending line is re-sampled.
/// 5 × 16 ms ≈ 80 ms of settle time.
pub const DEBOUNCE_PASSES: u8 = 5;

/// Delay between a win/loss and the next round (ms).
pub const ROUND_RESET_DELAY_MS: u64 = 2000;

// Feedback cues

/// Correct guess: high-pitched short beep.
pub const SUCCESS_TONE_HZ: u32 = 1000;
pub const SUCCESS_TONE_MS: u64 = 150;

/// Wrong guess: low-pitched long beep.
pub const FAILURE_TONE_HZ: u32 = 300;
pub const FAILURE_TONE_MS: u64 = 300;

// Entropy

/// `Some(seed)` skips ADC sampling and seeds every round from this value.
pub const FIXED_SEED: Option<u16> = None;

// Display

/// SSD1306 raster the layout is drawn for.
pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button LEFT    → P0.11  (active-low, internal pull-up)
//   Button RIGHT   → P0.12  (active-low, internal pull-up)
//   Button SELECT  → P0.24  (active-low, internal pull-up)
//   LED green      → P0.13
//   LED red        → P0.14
//   Buzzer         → P0.15  (PWM0 channel 0)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Entropy        → AIN0 / P0.02 (left floating)
