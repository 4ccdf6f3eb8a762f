//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a YAML grammar declaration into a temporary directory
pub fn write_grammar_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let grammar_path = temp_dir.path().join("grammar.yml");
    fs::write(&grammar_path, content).unwrap();
    (temp_dir, grammar_path)
}
