//! Word selection - secret word, pre-revealed letter and candidate letters.
//!
//! One 16-bit seed per round drives a small PRNG that makes every random
//! choice of the round: which dictionary word, which position is shown
//! up front, and which filler letters pad the candidate row.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{CANDIDATE_COUNT, MAX_WORD_LEN, PLACEHOLDER, WORD_LIST};

/// Fixed-capacity uppercase ASCII word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Word(heapless::Vec<u8, MAX_WORD_LEN>);

impl Word {
    /// Build from an uppercase ASCII string, truncated to capacity.
    pub fn from_ascii(text: &str) -> Self {
        let mut bytes = heapless::Vec::new();
        for &b in text.as_bytes().iter().take(MAX_WORD_LEN) {
            let _ = bytes.push(b);
        }
        Self(bytes)
    }

    /// A word of `len` placeholders.
    pub fn placeholders(len: usize) -> Self {
        let mut bytes = heapless::Vec::new();
        for _ in 0..len.min(MAX_WORD_LEN) {
            let _ = bytes.push(PLACEHOLDER);
        }
        Self(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Text view for rendering. Words only ever hold ASCII.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or("")
    }

    pub(crate) fn set(&mut self, index: usize, letter: u8) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = letter;
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Word {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// The letters a player can choose from: distinct, uppercase, sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CandidateLetters([u8; CANDIDATE_COUNT]);

impl CandidateLetters {
    /// Unique letters of `word` in order of first appearance, padded with
    /// random letters not yet present, then sorted ascending.
    pub fn build<R: Rng>(word: &Word, rng: &mut R) -> Self {
        let mut used = [false; 26];
        let mut letters = [b'A'; CANDIDATE_COUNT];
        let mut count = 0;

        for &b in word.as_bytes() {
            if count == CANDIDATE_COUNT {
                break;
            }
            if !b.is_ascii_uppercase() {
                continue;
            }
            let idx = usize::from(b - b'A');
            if !used[idx] {
                used[idx] = true;
                letters[count] = b;
                count += 1;
            }
        }

        while count < CANDIDATE_COUNT {
            let idx = rng.gen_range(0..26usize);
            if !used[idx] {
                used[idx] = true;
                letters[count] = b'A' + idx as u8;
                count += 1;
            }
        }

        letters.sort_unstable();
        Self(letters)
    }

    /// Letter at `index`, wrapping so any cursor value is valid.
    pub fn get(&self, index: usize) -> u8 {
        self.0[index % CANDIDATE_COUNT]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Position of `letter` in the row, if offered.
    pub fn position(&self, letter: u8) -> Option<usize> {
        self.0.iter().position(|&l| l == letter)
    }
}

/// Everything chosen at the start of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub hidden: Word,
    pub guessed: Word,
    pub letters: CandidateLetters,
}

impl Round {
    /// Round for a given word with position `revealed` shown up front.
    ///
    /// Only that one position is revealed, even if the same letter occurs
    /// elsewhere in the word.
    pub fn with_word<R: Rng>(word: &str, revealed: usize, rng: &mut R) -> Self {
        let hidden = Word::from_ascii(word);
        let mut guessed = Word::placeholders(hidden.len());
        if let Some(&letter) = hidden.as_bytes().get(revealed) {
            guessed.set(revealed, letter);
        }
        let letters = CandidateLetters::build(&hidden, rng);
        Self {
            hidden,
            guessed,
            letters,
        }
    }
}

/// Pick a dictionary word uniformly and derive the round from it.
pub fn select_random_word(seed: u16) -> Round {
    let mut rng = SmallRng::seed_from_u64(u64::from(seed));
    let word = WORD_LIST[rng.gen_range(0..WORD_LIST.len())];
    let revealed = rng.gen_range(0..word.len());
    Round::with_word(word, revealed, &mut rng)
}
