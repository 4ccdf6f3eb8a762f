//! Grammar registry
//!
//! The registry accumulates argument declarations under validation rules
//! and exposes the lookups that the parser and the completion engine run
//! against. Build it once, then treat it as read-only.

use crate::engine::{complete, parser, ParsedLine};
use crate::error::{
    DefinitionError, DefinitionResult, LookupError, LookupResult, ParseResult,
};
use crate::grammar::arg::{Completer, Flag, Positional};
use crate::grammar::spec::{ArgDecl, GrammarSpec};
use indexmap::IndexSet;
use std::collections::HashSet;
use std::fmt;

/// A command grammar: ordered mandatory positionals plus named flags
///
/// Positional and flag names share one namespace. Every name or alias is
/// globally unique within a grammar.
#[derive(Default)]
pub struct Grammar {
    /// Declaration order is required input order
    positionals: Vec<Positional>,

    /// Declaration order is preserved for deterministic completion output
    flags: Vec<Flag>,

    /// Every declared name and alias, in declaration order
    names: IndexSet<String>,
}

impl Grammar {
    /// Create an empty grammar
    pub fn new() -> Self {
        Grammar {
            positionals: Vec::new(),
            flags: Vec::new(),
            names: IndexSet::new(),
        }
    }

    /// Register one argument
    ///
    /// The first token classifies the declaration: a dash-prefixed token
    /// makes the whole list the aliases of one new flag, anything else
    /// must be a single positional name.
    pub fn register<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        completer: Option<Completer>,
        label: Option<&str>,
    ) -> DefinitionResult<()> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let Some(first) = tokens.first() else {
            return Err(DefinitionError::NoTokens);
        };

        for (index, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(DefinitionError::EmptyToken(index));
            }
        }

        // One namespace across both variants, checked before any mutation
        // so a failed registration leaves the grammar untouched.
        let mut fresh: HashSet<&str> = HashSet::new();
        for token in &tokens {
            if self.names.contains(token.as_str()) || !fresh.insert(token.as_str()) {
                return Err(DefinitionError::Duplicate(token.clone()));
            }
        }

        if first.starts_with('-') {
            self.flags.push(Flag::new(&tokens, completer, label)?);
        } else {
            if tokens.len() > 1 {
                return Err(DefinitionError::MultiplePositionalNames(tokens));
            }
            self.positionals.push(Positional::new(first, completer, label)?);
        }

        for token in tokens {
            self.names.insert(token);
        }

        Ok(())
    }

    /// Build a grammar from a declaration spec
    ///
    /// Declarations register in order, so the same invariants hold as for
    /// direct registration. Completers cannot be declared in a spec;
    /// attach them afterward with [`Grammar::attach_completer`].
    pub fn from_spec(spec: &GrammarSpec) -> DefinitionResult<Self> {
        let mut grammar = Grammar::new();

        for decl in &spec.arguments {
            match decl {
                ArgDecl::Positional { name, label } => {
                    grammar.register(&[name.as_str()], None, label.as_deref())?;
                }
                ArgDecl::Flag { flags, label } => {
                    grammar.register(flags, None, label.as_deref())?;
                }
            }
        }

        Ok(grammar)
    }

    /// Attach a completer to the argument carrying `label`
    pub fn attach_completer(
        &mut self,
        label: &str,
        completer: Completer,
    ) -> DefinitionResult<()> {
        if let Some(positional) = self.positionals.iter_mut().find(|p| p.label == label) {
            positional.set_completer(completer);
            return Ok(());
        }
        if let Some(flag) = self.flags.iter_mut().find(|f| f.label == label) {
            flag.set_completer(completer);
            return Ok(());
        }
        Err(DefinitionError::UnknownLabel(label.to_string()))
    }

    /// Every flag spelling with `prefix` as an exact leading substring,
    /// in declaration order
    pub fn flags_matching(&self, prefix: &str) -> Vec<&str> {
        self.names
            .iter()
            .filter(|name| name.starts_with('-') && name.starts_with(prefix))
            .map(|name| name.as_str())
            .collect()
    }

    /// Resolve a flag by exact alias
    pub fn find_flag(&self, alias: &str) -> LookupResult<&Flag> {
        if !alias.starts_with('-') {
            return Err(LookupError::NotAFlagSpelling(alias.to_string()));
        }
        self.flags
            .iter()
            .find(|flag| flag.has_alias(alias))
            .ok_or_else(|| LookupError::UnknownAlias(alias.to_string()))
    }

    /// Declared positionals, in required input order
    pub fn positionals(&self) -> &[Positional] {
        &self.positionals
    }

    /// Declared flags, in declaration order
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Parse a command line against this grammar
    pub fn parse(&self, line: &str) -> ParseResult<ParsedLine> {
        parser::parse(self, line)
    }

    /// Propose completions for the token currently being typed
    pub fn suggest(&self, line: &str) -> Vec<String> {
        complete::suggest(self, line)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("positionals", &self.positionals)
            .field("flags", &self.flags)
            .finish()
    }
}
