//! The single game context shared by the main loop and the three
//! hardware event sources.
//!
//! | source          | handler                    | writes                        |
//! |-----------------|----------------------------|-------------------------------|
//! | pin change      | [`Game::on_pin_change`]    | debounce state                |
//! | debounce timer  | [`Game::on_debounce_tick`] | debounce state, event flags   |
//! | reset countdown | [`Game::on_reset_expired`] | everything (new round)        |
//! | main loop       | [`Game::poll`]             | round state, event flags      |
//!
//! Handlers run one at a time. A source whose `*_enabled()` accessor is
//! `false` must not be delivered; that is how the firmware "disables the
//! interrupt" and how re-entry is ruled out.

use crate::game::{select_random_word, GameState};
use crate::input::debounce::{ConfirmedEvents, Debouncer};
use crate::input::dispatch::{dispatch, Dispatch};
use crate::input::{Button, ButtonLevels};
use crate::round_reset::RoundResetTimer;

/// Event sources that may currently fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sources {
    pub pin_change: bool,
    pub debounce_tick: bool,
    pub reset_timer: bool,
}

pub struct Game {
    state: GameState,
    debounce: Debouncer,
    events: ConfirmedEvents,
    reset: RoundResetTimer,
}

impl Game {
    /// Power-on: first round drawn from `seed`, filter idle, timer disarmed.
    pub fn new(seed: u16) -> Self {
        Self::with_state(GameState::new(select_random_word(seed)))
    }

    /// Start from a prepared round.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            debounce: Debouncer::new(),
            events: ConfirmedEvents::default(),
            reset: RoundResetTimer::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debounce
    }

    pub fn confirmed(&self) -> ConfirmedEvents {
        self.events
    }

    pub fn reset_timer(&self) -> &RoundResetTimer {
        &self.reset
    }

    /// Round is over and the reset countdown is running.
    pub fn round_ending(&self) -> bool {
        self.reset.is_armed()
    }

    pub fn sources(&self) -> Sources {
        Sources {
            pin_change: self.debounce.pin_change_enabled(),
            debounce_tick: self.debounce.tick_enabled(),
            reset_timer: self.reset.is_armed(),
        }
    }

    /// Pin-change handler. Returns `true` when filtering started and the
    /// debounce timer must be (re)started.
    pub fn on_pin_change(&mut self, levels: ButtonLevels) -> bool {
        self.debounce.on_pin_change(levels)
    }

    /// Debounce timer handler. Returns the button confirmed on this tick.
    pub fn on_debounce_tick(&mut self, levels: ButtonLevels) -> Option<Button> {
        self.debounce.on_tick(levels, &mut self.events)
    }

    /// Reset countdown handler.
    ///
    /// Disarms first; a stray expiry with the timer already disarmed does
    /// nothing and returns `false`. Otherwise clears pending input, starts a
    /// new round from `seed` and returns `true` (full repaint needed).
    pub fn on_reset_expired(&mut self, seed: u16) -> bool {
        if !self.reset.fire() {
            return false;
        }
        self.events.clear();
        self.state.restart(select_random_word(seed));
        true
    }

    /// One main-loop iteration.
    ///
    /// Takes the highest-priority confirmed event, clears all flags and
    /// applies it. Nothing is dispatched while the round is ending. Arms the
    /// reset timer when the step ends the round.
    pub fn poll(&mut self) -> Option<Dispatch> {
        if self.round_ending() {
            return None;
        }
        let button = self.events.take()?;
        let mut step = dispatch(&mut self.state, button);
        if step.outcome.is_terminal() {
            step.armed_reset = self.reset.arm();
        }
        Some(step)
    }
}
