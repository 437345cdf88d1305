//! Hangman for a three-button, one-OLED microcontroller board.
//!
//! The pure logic modules (word selection, round state, debounce filter,
//! dispatcher, round-reset timer, rendering and the host simulator) build
//! and test on the host without any embedded hardware.
//!
//! Usage: `cargo test`
//!
//! With the `embedded` feature the crate also provides the nRF52840
//! firmware pieces (buttons, display, feedback, entropy, game loop) that
//! `main.rs` wires together.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod context;
pub mod game;
pub mod input;
pub mod round_reset;
pub mod sim;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod app;
#[cfg(feature = "embedded")]
pub mod entropy;
#[cfg(feature = "embedded")]
pub mod error;
#[cfg(feature = "embedded")]
pub mod feedback;

pub use context::Game;
pub use game::{GameState, Outcome};
pub use input::Button;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - cross-module scenarios
// ═══════════════════════════════════════════════════════════════════════════
