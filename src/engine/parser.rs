//! Command-line parsing
//!
//! The parser consumes a tokenized command line against a grammar and
//! produces a structured result or a validation error.

use crate::error::{ParseError, ParseResult};
use crate::grammar::Grammar;
use std::collections::HashMap;

/// A parsed command line
///
/// Every declared label maps to its value, or to `None` for a flag that
/// was not supplied. Results are ephemeral, created fresh per parse call.
#[derive(Debug, Clone, Default)]
pub struct ParsedLine {
    values: HashMap<String, Option<String>>,
}

impl ParsedLine {
    /// Value bound to `label`, if one was supplied on the line
    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).and_then(|value| value.as_deref())
    }

    /// Whether `label` was bound to a value on this line
    pub fn is_set(&self, label: &str) -> bool {
        matches!(self.values.get(label), Some(Some(_)))
    }

    /// Whether `label` is carried by this result at all (set or absent)
    pub fn contains(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    /// Every label carried by this result
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|label| label.as_str())
    }

    fn bind(&mut self, label: &str, value: Option<String>) {
        self.values.insert(label.to_string(), value);
    }
}

/// Parse a raw command line against a grammar
pub fn parse(grammar: &Grammar, line: &str) -> ParseResult<ParsedLine> {
    parse_tokens(grammar, &super::tokenize(line))
}

/// Parse an already-tokenized command line against a grammar
///
/// Tokens split into a leading run of positional values followed by
/// (flag-name, flag-value) pairs. Positionals cannot reappear once the
/// first dash-prefixed token has been seen.
pub fn parse_tokens(grammar: &Grammar, tokens: &[String]) -> ParseResult<ParsedLine> {
    let mut parsed = ParsedLine::default();
    for flag in grammar.flags() {
        parsed.bind(&flag.label, None);
    }

    let expected = grammar.positionals().len();
    let leading = tokens
        .iter()
        .take_while(|token| !token.starts_with('-'))
        .count();

    if leading < expected {
        return Err(ParseError::InsufficientPositionals {
            expected,
            got: leading,
        });
    }
    if leading > expected {
        return Err(ParseError::TooManyPositionals {
            expected,
            got: leading,
        });
    }

    for (slot, value) in grammar.positionals().iter().zip(&tokens[..leading]) {
        parsed.bind(&slot.label, Some(value.clone()));
    }

    // Flags pair strictly as (name, value), stepping two at a time. The
    // last occurrence of a repeated flag wins. A dangling name with no
    // value token at the tail is skipped, not an error.
    let mut index = leading;
    while index + 1 < tokens.len() {
        let name = &tokens[index];
        let flag = grammar
            .find_flag(name)
            .map_err(|_| ParseError::UnknownFlag { name: name.clone() })?;
        parsed.bind(&flag.label, Some(tokens[index + 1].clone()));
        index += 2;
    }

    Ok(parsed)
}
