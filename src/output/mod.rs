//! Terminal output
//!
//! Line-oriented console I/O and styling helpers for game messages.

pub mod console;
pub mod formatters;

pub use console::Console;
