//! Round progress: revealed letters, mistakes, cursor and outcome.

use super::word::{CandidateLetters, Round, Word};
use crate::config::{CANDIDATE_COUNT, MAX_MISTAKES};

/// How the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Result of submitting one letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Guess {
    /// Letter occurs in the word; `positions` occurrences were (re)revealed.
    Hit { positions: usize },
    /// Letter is not in the word; one mistake counted.
    Miss,
}

/// Mutable record of the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    hidden: Word,
    guessed: Word,
    letters: CandidateLetters,
    cursor: usize,
    mistakes: u8,
    outcome: Outcome,
}

impl GameState {
    pub fn new(round: Round) -> Self {
        Self {
            hidden: round.hidden,
            guessed: round.guessed,
            letters: round.letters,
            cursor: 0,
            mistakes: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Replace the whole record with a fresh round.
    pub fn restart(&mut self, round: Round) {
        *self = Self::new(round);
    }

    pub fn hidden_word(&self) -> &Word {
        &self.hidden
    }

    pub fn guessed_word(&self) -> &Word {
        &self.guessed
    }

    pub fn letters(&self) -> &CandidateLetters {
        &self.letters
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Letter under the cursor.
    pub fn selected_letter(&self) -> u8 {
        self.letters.get(self.cursor)
    }

    /// Move the cursor one letter left, wrapping to the end of the row.
    pub fn cursor_left(&mut self) {
        self.cursor = (self.cursor + CANDIDATE_COUNT - 1) % CANDIDATE_COUNT;
    }

    /// Move the cursor one letter right, wrapping to the start of the row.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1) % CANDIDATE_COUNT;
    }

    /// Reveal every occurrence of `letter`, or count a mistake.
    ///
    /// Ignored once the round is over. Re-submitting a revealed letter is
    /// a hit that changes nothing.
    pub fn submit(&mut self, letter: u8) -> Option<Guess> {
        if self.outcome.is_terminal() {
            return None;
        }

        let mut positions = 0;
        for i in 0..self.hidden.len() {
            if self.hidden.as_bytes()[i] == letter {
                self.guessed.set(i, letter);
                positions += 1;
            }
        }

        let guess = if positions > 0 {
            Guess::Hit { positions }
        } else {
            self.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
            Guess::Miss
        };

        self.outcome = if self.guessed == self.hidden {
            Outcome::Won
        } else if self.mistakes >= MAX_MISTAKES {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        Some(guess)
    }
}
