//! Deterministic host-side simulation of the firmware event loop.
//!
//! `Simulator` drives the same [`Game`] context the firmware runs, but
//! replaces the hardware with a virtual millisecond clock:
//!
//! - button lines are set by the test, including bounce sequences;
//! - the debounce tick fires every `DEBOUNCE_TICK_MS` while filtering;
//! - the reset countdown fires the timer's `delay_ms()` after arming.
//!
//! After every delivered event one main-loop step runs, which is what an
//! unconditionally polling loop would observe. Round seeds come from a
//! fixed sequence, so every run is reproducible.

use crate::config::DEBOUNCE_TICK_MS;
use crate::context::Game;
use crate::input::dispatch::Dispatch;
use crate::input::{Button, ButtonLevels};

/// How long [`Simulator::tap`] holds a button, and waits after release.
pub const TAP_HOLD_MS: u64 = 120;
pub const TAP_SETTLE_MS: u64 = 40;

/// Counters collected over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Presses that survived the debounce filter.
    pub confirmed: u32,
    /// Main-loop steps that applied a button.
    pub dispatched: u32,
    /// Times the round-reset timer was armed.
    pub resets_armed: u32,
    /// Rounds started by the reset countdown.
    pub rounds_started: u32,
}

pub struct Simulator {
    game: Game,
    now_ms: u64,
    lines: ButtonLevels,
    next_tick_ms: Option<u64>,
    reset_at_ms: Option<u64>,
    seed: u16,
    stats: SimStats,
    last: Option<Dispatch>,
}

impl Simulator {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            now_ms: 0,
            lines: ButtonLevels::RELEASED,
            next_tick_ms: None,
            reset_at_ms: None,
            seed: 0x5EED,
            stats: SimStats::default(),
            last: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Most recent main-loop dispatch.
    pub fn last_dispatch(&self) -> Option<Dispatch> {
        self.last
    }

    /// Change one raw line level, as a bouncing contact would.
    pub fn set_line(&mut self, button: Button, pressed: bool) {
        if self.lines.is_pressed(button) == pressed {
            return;
        }
        self.lines.set(button, pressed);

        if self.game.sources().pin_change && self.game.on_pin_change(self.lines) {
            self.next_tick_ms = Some(self.now_ms + DEBOUNCE_TICK_MS);
        }
        self.main_loop_step();
    }

    /// Run the virtual clock forward, delivering every timer event due.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms + ms;
        loop {
            let tick = self.next_tick_ms.filter(|&t| t <= target);
            let reset = self.reset_at_ms.filter(|&t| t <= target);

            match (tick, reset) {
                (Some(t), Some(r)) if r < t => self.fire_reset(r),
                (Some(t), _) => self.fire_tick(t),
                (None, Some(r)) => self.fire_reset(r),
                (None, None) => break,
            }
        }
        self.now_ms = target;
    }

    /// Clean press and release.
    pub fn tap(&mut self, button: Button) {
        self.set_line(button, true);
        self.advance(TAP_HOLD_MS);
        self.set_line(button, false);
        self.advance(TAP_SETTLE_MS);
    }

    /// Press with contact bounce: the line toggles at each offset in
    /// `edges_ms` (relative to now, ascending) before settling pressed,
    /// is held for `hold_ms`, then released cleanly.
    pub fn bouncy_press(&mut self, button: Button, edges_ms: &[u64], hold_ms: u64) {
        let start = self.now_ms;
        let mut pressed = false;
        for &at in edges_ms {
            let due = start + at;
            if due > self.now_ms {
                self.advance(due - self.now_ms);
            }
            pressed = !pressed;
            self.set_line(button, pressed);
        }
        if !pressed {
            self.set_line(button, true);
        }
        self.advance(hold_ms);
        self.set_line(button, false);
        self.advance(TAP_SETTLE_MS);
    }

    /// Move the cursor right until `letter` is highlighted, then select it.
    /// Returns `false` if the letter is not offered this round, or the
    /// round is already over and the cursor no longer moves.
    pub fn choose_letter(&mut self, letter: u8) -> bool {
        if self.game.round_ending() {
            return false;
        }
        let Some(target) = self.game.state().letters().position(letter) else {
            return false;
        };
        while self.game.state().cursor() != target {
            self.tap(Button::Right);
        }
        self.tap(Button::Select);
        true
    }

    fn fire_tick(&mut self, at: u64) {
        self.now_ms = at;
        if self.game.on_debounce_tick(self.lines).is_some() {
            self.stats.confirmed += 1;
        }
        self.next_tick_ms = if self.game.sources().debounce_tick {
            Some(at + DEBOUNCE_TICK_MS)
        } else {
            None
        };
        self.main_loop_step();
    }

    fn fire_reset(&mut self, at: u64) {
        self.now_ms = at;
        self.reset_at_ms = None;
        let seed = self.next_seed();
        if self.game.on_reset_expired(seed) {
            self.stats.rounds_started += 1;
        }
        self.main_loop_step();
    }

    fn main_loop_step(&mut self) {
        let Some(step) = self.game.poll() else {
            return;
        };
        self.stats.dispatched += 1;
        if step.armed_reset {
            self.stats.resets_armed += 1;
            self.reset_at_ms = Some(self.now_ms + self.game.reset_timer().delay_ms());
        }
        self.last = Some(step);
    }

    fn next_seed(&mut self) -> u16 {
        self.seed = self.seed.wrapping_mul(25173).wrapping_add(13849);
        self.seed
    }
}
