//! Parsing and completion engines
//!
//! Both engines read a built grammar on every call and never mutate it.
//! They allocate only local, per-call state.

pub mod complete;
pub mod parser;

// Re-export main types
pub use complete::*;
pub use parser::*;

/// Split a command line under shell-style quoting rules
///
/// Tokenization is inherited from `shlex`. A line the tokenizer rejects
/// (unbalanced quoting) yields no tokens.
pub(crate) fn tokenize(line: &str) -> Vec<String> {
    shlex::split(line).unwrap_or_default()
}
