//! Argument model
//!
//! This module defines the value types that describe a single argument of
//! a command grammar: a mandatory positional or an optional named flag.

use crate::error::{DefinitionError, DefinitionResult};
use std::fmt;

/// A value completer: maps a partial word to candidate completions.
///
/// Completers are total. Any input, including the empty string, yields a
/// finite ordered list of candidates. No matches is an empty list, never
/// an error.
pub type Completer = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// A mandatory argument identified by its position on the command line
pub struct Positional {
    /// Name used in grammar declarations (must not start with '-')
    pub name: String,

    /// Key under which the parsed value is stored
    pub label: String,

    /// Optional value completer
    completer: Option<Completer>,
}

impl Positional {
    /// Create a positional argument
    ///
    /// The label defaults to the name when not given.
    pub fn new(
        name: &str,
        completer: Option<Completer>,
        label: Option<&str>,
    ) -> DefinitionResult<Self> {
        if name.starts_with('-') {
            return Err(DefinitionError::DashPrefixedName(name.to_string()));
        }

        Ok(Positional {
            name: name.to_string(),
            label: label.unwrap_or(name).to_string(),
            completer,
        })
    }

    /// Propose completions for this argument's value
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggest_with(&self.completer, word)
    }

    /// Whether a completer is attached
    pub fn has_completer(&self) -> bool {
        self.completer.is_some()
    }

    pub(crate) fn set_completer(&mut self, completer: Completer) {
        self.completer = Some(completer);
    }
}

/// An optional named argument introduced by one of its dash-prefixed
/// aliases, followed by exactly one value token
pub struct Flag {
    /// Every spelling of this flag (each starts with '-')
    pub aliases: Vec<String>,

    /// Key under which the parsed value is stored
    pub label: String,

    /// Optional value completer
    completer: Option<Completer>,
}

impl Flag {
    /// Create a flag from its aliases
    ///
    /// The label defaults to the first alias with leading dashes stripped.
    pub fn new(
        aliases: &[String],
        completer: Option<Completer>,
        label: Option<&str>,
    ) -> DefinitionResult<Self> {
        let Some(first) = aliases.first() else {
            return Err(DefinitionError::NoTokens);
        };

        for alias in aliases {
            if !alias.starts_with('-') {
                return Err(DefinitionError::HeterogeneousAliases {
                    token: alias.clone(),
                    aliases: aliases.to_vec(),
                });
            }
        }

        let label = match label {
            Some(label) => label.to_string(),
            None => first.trim_start_matches('-').to_string(),
        };

        Ok(Flag {
            aliases: aliases.to_vec(),
            label,
            completer,
        })
    }

    /// Whether `alias` is one of this flag's spellings
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    /// Propose completions for this flag's value
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggest_with(&self.completer, word)
    }

    /// Whether a completer is attached
    pub fn has_completer(&self) -> bool {
        self.completer.is_some()
    }

    pub(crate) fn set_completer(&mut self, completer: Completer) {
        self.completer = Some(completer);
    }
}

fn suggest_with(completer: &Option<Completer>, word: &str) -> Vec<String> {
    match completer {
        Some(complete) => complete(word),
        None => Vec::new(),
    }
}

// Completers are opaque functions, so Debug is written by hand.

impl fmt::Debug for Positional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Positional")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("completer", &self.completer.is_some())
            .finish()
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("aliases", &self.aliases)
            .field("label", &self.label)
            .field("completer", &self.completer.is_some())
            .finish()
    }
}
