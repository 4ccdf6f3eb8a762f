//! Gramline - declarative command-line grammars with completion
//!
//! Gramline lets a caller declare a small command grammar (an ordered list
//! of mandatory positional values plus a set of optional named flags),
//! parse raw command lines against it, and propose context-aware
//! completions for the token currently being typed.

// Public modules
pub mod cli;
pub mod engine;
pub mod error;
pub mod grammar;

// Re-export commonly used types
pub use engine::ParsedLine;
pub use error::{GramlineError, Result};
pub use grammar::Grammar;

/// Current version of gramline
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
