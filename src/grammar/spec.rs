//! Grammar declarations
//!
//! This module defines the serde types for declaring a grammar in YAML,
//! plus loading helpers. Completers are opaque functions and cannot live
//! in a file; attach them afterward with `Grammar::attach_completer`.

use crate::error::GramlineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level grammar declaration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GrammarSpec {
    /// Command name (optional, informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Usage description (optional, informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Argument declarations, in required input order
    #[serde(default)]
    pub arguments: Vec<ArgDecl>,
}

/// A single argument declaration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ArgDecl {
    /// A positional argument: exactly one name
    Positional {
        /// Declaration name (must not start with '-')
        name: String,

        /// Result key, defaults to the name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },

    /// A flag: one or more dash-prefixed aliases
    Flag {
        /// Every spelling of the flag
        flags: Vec<String>,

        /// Result key, defaults to the first alias without leading dashes
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

/// Parse a grammar declaration from a YAML string
pub fn load_spec(yaml: &str) -> Result<GrammarSpec, GramlineError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse a grammar declaration from a file
pub fn load_spec_file(path: &Path) -> Result<GrammarSpec, GramlineError> {
    let contents = fs::read_to_string(path)?;
    load_spec(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_simple_spec() {
        let yaml = r#"
name: deploy
usage: Deploy a target
arguments:
  - name: target
  - flags: ["--env", "-e"]
"#;
        let spec = load_spec(yaml).unwrap();
        assert_eq!(spec.name, Some("deploy".to_string()));
        assert_eq!(spec.arguments.len(), 2);
    }

    #[test]
    fn test_load_spec_classifies_declarations() {
        let yaml = r#"
arguments:
  - name: target
    label: dest
  - flags: ["--force"]
    label: overwrite
"#;
        let spec = load_spec(yaml).unwrap();

        match &spec.arguments[0] {
            ArgDecl::Positional { name, label } => {
                assert_eq!(name, "target");
                assert_eq!(label.as_deref(), Some("dest"));
            }
            other => panic!("expected positional, got: {:?}", other),
        }
        match &spec.arguments[1] {
            ArgDecl::Flag { flags, label } => {
                assert_eq!(flags, &["--force".to_string()]);
                assert_eq!(label.as_deref(), Some("overwrite"));
            }
            other => panic!("expected flag, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_spec_without_arguments() {
        let spec = load_spec("name: bare").unwrap();
        assert!(spec.arguments.is_empty());
    }

    #[test]
    fn test_load_spec_rejects_malformed_yaml() {
        let result = load_spec("arguments: [ {");
        assert!(matches!(result, Err(GramlineError::Yaml(_))));
    }
}
