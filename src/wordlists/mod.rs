//! Secret word lists
//!
//! Provides the embedded default list plus loading from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
