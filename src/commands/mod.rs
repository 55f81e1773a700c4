//! Command implementations

pub mod season;
pub mod simple;

pub use season::show_season;
pub use simple::{StdinInput, run_simple};
