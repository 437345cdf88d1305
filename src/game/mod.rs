//! Game rules - word selection and round state.

pub mod state;
pub mod word;

pub use state::{GameState, Guess, Outcome};
pub use word::{select_random_word, CandidateLetters, Round, Word};
