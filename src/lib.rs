//! Wordle Season
//!
//! A Wordle game engine with per-letter feedback, scoring, and a persisted
//! "previous season" (the score and secret word of the last finished game).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_season::core::{GameState, Hint};
//!
//! let mut game = GameState::with_chances("great", 6).unwrap();
//! let record = game.register("gater").unwrap();
//!
//! let hints: Vec<Hint> = record.letters().iter().map(|l| l.hint()).collect();
//! assert_eq!(hints[0], Hint::Correct);
//! assert_eq!(hints[1], Hint::Present);
//!
//! game.register("great").unwrap();
//! assert!(game.has_guessed_correctly());
//! assert_eq!(game.stats().score, 50);
//! ```

// Core domain types and game engine
pub mod core;

// Previous-season persistence
pub mod storage;

// Game flow between engine, renderer, and storage
pub mod session;

// Runtime settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
