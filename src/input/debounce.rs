//! Interrupt-driven button debouncer.
//!
//! ```text
//!            pin change, a line asserted
//!   IDLE ─────────────────────────────────▶ FILTERING
//!    ▲                                        │  debounce tick
//!    │   DEBOUNCE_PASSES-th tick:             │  (passes += 1)
//!    └── re-sample, maybe confirm ◀───────────┘
//! ```
//!
//! While FILTERING the pin-change source is disabled and only the
//! periodic debounce tick runs; while IDLE it is the other way round.
//! One button is tracked at a time, so a second button pressed during
//! the settle window is simply never seen.

use super::{Button, ButtonLevels};
use crate::config::DEBOUNCE_PASSES;

/// One flag per button, set when a press survives filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfirmedEvents {
    pub left: bool,
    pub right: bool,
    pub select: bool,
}

impl ConfirmedEvents {
    pub fn raise(&mut self, button: Button) {
        match button {
            Button::Left => self.left = true,
            Button::Right => self.right = true,
            Button::Select => self.select = true,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.select
    }

    /// Highest-priority raised flag (LEFT, RIGHT, SELECT); clears all three.
    pub fn take(&mut self) -> Option<Button> {
        let button = if self.left {
            Some(Button::Left)
        } else if self.right {
            Some(Button::Right)
        } else if self.select {
            Some(Button::Select)
        } else {
            None
        };
        self.clear();
        button
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Debounce filter phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    Filtering,
}

/// Single-button debounce state machine.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    pending: Option<Button>,
    active: bool,
    passes: u8,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            pending: None,
            active: false,
            passes: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.active {
            Phase::Filtering
        } else {
            Phase::Idle
        }
    }

    /// Button currently being confirmed.
    pub fn pending(&self) -> Option<Button> {
        self.pending
    }

    /// Pin-change source is enabled only while idle.
    pub fn pin_change_enabled(&self) -> bool {
        !self.active
    }

    /// Periodic debounce tick is enabled only while filtering.
    pub fn tick_enabled(&self) -> bool {
        self.active
    }

    /// Pin-change handler.
    ///
    /// Starts filtering the first asserted line. Returns `true` when the
    /// filter left IDLE; edges while filtering and release edges are ignored.
    pub fn on_pin_change(&mut self, levels: ButtonLevels) -> bool {
        if self.active {
            return false;
        }
        let Some(button) = levels.first_pressed() else {
            return false;
        };

        self.pending = Some(button);
        self.passes = 0;
        self.active = true;
        true
    }

    /// Debounce timer handler.
    ///
    /// On the threshold pass the pending line is re-sampled and, if still
    /// pressed, its flag is raised in `events`. Either way the filter
    /// returns to IDLE. Returns the confirmed button, if any.
    pub fn on_tick(&mut self, levels: ButtonLevels, events: &mut ConfirmedEvents) -> Option<Button> {
        if !self.active {
            return None;
        }

        self.passes += 1;
        if self.passes < DEBOUNCE_PASSES {
            return None;
        }

        let confirmed = self.pending.filter(|&b| levels.is_pressed(b));
        if let Some(button) = confirmed {
            events.raise(button);
        }

        self.pending = None;
        self.passes = 0;
        self.active = false;
        confirmed
    }
}
