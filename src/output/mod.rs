//! Terminal output formatting
//!
//! Line-based renderer and pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::TerminalRenderer;
