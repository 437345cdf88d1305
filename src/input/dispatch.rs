//! Applies confirmed button events to the round.
//!
//! The dispatcher never touches hardware. It returns a [`Dispatch`]
//! describing the feedback cue to play and the screen regions to repaint;
//! the caller owns the LEDs, buzzer and display.

use super::Button;
use crate::config::{FAILURE_TONE_HZ, FAILURE_TONE_MS, SUCCESS_TONE_HZ, SUCCESS_TONE_MS};
use crate::game::{GameState, Guess, Outcome};

/// LED + buzzer feedback for a submitted letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Green LED, high-pitched tone.
    Success,
    /// Red LED, low-pitched tone.
    Failure,
}

impl Cue {
    pub fn tone_hz(self) -> u32 {
        match self {
            Cue::Success => SUCCESS_TONE_HZ,
            Cue::Failure => FAILURE_TONE_HZ,
        }
    }

    pub fn duration_ms(self) -> u64 {
        match self {
            Cue::Success => SUCCESS_TONE_MS,
            Cue::Failure => FAILURE_TONE_MS,
        }
    }
}

/// Screen regions to repaint after a state change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw {
    pub word: bool,
    pub letters: bool,
    pub mistakes: bool,
    pub hangman: bool,
    /// Full-screen win/loss message; supersedes the regions above.
    pub message: Option<Outcome>,
}

impl Redraw {
    pub const NONE: Self = Self {
        word: false,
        letters: false,
        mistakes: false,
        hangman: false,
        message: None,
    };

    /// Every region of a fresh round.
    pub const ALL: Self = Self {
        word: true,
        letters: true,
        mistakes: true,
        hangman: true,
        message: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// What one dispatch step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatch {
    pub button: Button,
    pub guess: Option<Guess>,
    pub cue: Option<Cue>,
    pub redraw: Redraw,
    pub outcome: Outcome,
    /// Set by the game context when this step armed the round-reset timer.
    pub armed_reset: bool,
}

impl Dispatch {
    /// This step ended the round.
    pub fn finished_round(&self) -> bool {
        self.redraw.message.is_some()
    }
}

/// Apply one confirmed button to `state`.
pub fn dispatch(state: &mut GameState, button: Button) -> Dispatch {
    let mut redraw = Redraw::NONE;
    let mut guess = None;
    let mut cue = None;

    match button {
        Button::Left => {
            state.cursor_left();
            redraw.letters = true;
        }
        Button::Right => {
            state.cursor_right();
            redraw.letters = true;
        }
        Button::Select => {
            let letter = state.selected_letter();
            guess = state.submit(letter);
            match guess {
                Some(Guess::Hit { .. }) => {
                    cue = Some(Cue::Success);
                    redraw.word = true;
                }
                Some(Guess::Miss) => {
                    cue = Some(Cue::Failure);
                    redraw.mistakes = true;
                    redraw.hangman = true;
                }
                None => {}
            }
            if guess.is_some() && state.outcome().is_terminal() {
                redraw.message = Some(state.outcome());
            }
        }
    }

    Dispatch {
        button,
        guess,
        cue,
        redraw,
        outcome: state.outcome(),
        armed_reset: false,
    }
}
