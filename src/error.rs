//! Error types for gramline

use std::io;
use thiserror::Error;

/// Result type alias for gramline operations
pub type Result<T> = std::result::Result<T, GramlineError>;

/// Main error type for gramline
#[derive(Error, Debug)]
pub enum GramlineError {
    /// Grammar definition errors
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Command-line parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Flag lookup errors
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Grammar definition and registration errors
///
/// These are programmer errors, expected to surface during development or
/// startup. They abort grammar construction immediately.
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Empty string for name or flag number {0}")]
    EmptyToken(usize),

    #[error("The name or flag '{0}' is already defined in an argument")]
    Duplicate(String),

    #[error("A positional argument name must not start with '-': {0}")]
    DashPrefixedName(String),

    #[error("Heterogeneous names or flags among {aliases:?}: '{token}' does not start with '-'")]
    HeterogeneousAliases { token: String, aliases: Vec<String> },

    #[error("A positional argument takes exactly one name, got {0:?}")]
    MultiplePositionalNames(Vec<String>),

    #[error("At least one name or flag is required")]
    NoTokens,

    #[error("No argument carries the label '{0}'")]
    UnknownLabel(String),
}

/// Command-line parse errors (malformed end-user input)
///
/// These are expected and recoverable: the caller catches them and renders
/// a usage message from the structured fields.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Not enough positional values. Expected {expected}, got {got}")]
    InsufficientPositionals { expected: usize, got: usize },

    #[error("Too many positional values. Expected {expected}, got {got}")]
    TooManyPositionals { expected: usize, got: usize },

    #[error("Unknown flag: {name}")]
    UnknownFlag { name: String },
}

/// Flag lookup errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Not a flag spelling: {0}")]
    NotAFlagSpelling(String),

    #[error("Unknown flag alias: {0}")]
    UnknownAlias(String),
}

/// Specialized result type for grammar definition operations
pub type DefinitionResult<T> = std::result::Result<T, DefinitionError>;

/// Specialized result type for parse operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Specialized result type for flag lookup operations
pub type LookupResult<T> = std::result::Result<T, LookupError>;
