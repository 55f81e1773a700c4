//! Core domain types for the game
//!
//! This module contains the word, feedback and game state types. Nothing here
//! performs I/O; rendering and persistence live in other modules.

mod feedback;
mod frequency;
mod game;
mod word;

pub use feedback::{GuessRecord, Hint, LetterStat, evaluate};
pub use frequency::FrequencyCounter;
pub use game::{GameError, GameState, GameStats, Outcome, POINTS_PER_CHANCE, RegisterError};
pub use word::{Word, WordError};
