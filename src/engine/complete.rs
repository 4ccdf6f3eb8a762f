//! Context-aware completion
//!
//! The completion engine reconstructs where in the grammar the cursor sits
//! from a flat token stream: the token being typed is either a flag name,
//! a flag's value, or the Nth positional. It never errors; when no
//! suggestion logic applies the answer is an empty list.

use crate::grammar::Grammar;

/// Propose completions for the token currently being typed
///
/// Contexts are tried in strict priority order:
/// 1. An in-progress dash token completes flag names.
/// 2. A preceding flag token that carries a completer answers for the
///    word being typed.
/// 3. Otherwise the word is the positional at its own index.
pub fn suggest(grammar: &Grammar, line: &str) -> Vec<String> {
    let tokens = super::tokenize(line);
    let Some(last) = tokens.last() else {
        return Vec::new();
    };
    let last_index = tokens.len() - 1;

    // A dash token still being typed (no terminating whitespace yet)
    // completes against the flag namespace itself.
    if last.starts_with('-') && !line.ends_with(char::is_whitespace) {
        return grammar
            .flags_matching(last)
            .into_iter()
            .map(|name| name.to_string())
            .collect();
    }

    // Walk back toward the start of the line. The first token naming a
    // flag with a completer answers for the word being typed, even with
    // an empty list. The walk starts at the final token itself so that a
    // just-terminated flag claims the empty value following it; it stops
    // before the first token, which can only ever be a positional or a
    // flag name in mid-definition.
    for index in (1..=last_index).rev() {
        let token = &tokens[index];
        if !token.starts_with('-') {
            continue;
        }
        if let Ok(flag) = grammar.find_flag(token) {
            if flag.has_completer() {
                return flag.suggest(last);
            }
        }
    }

    // No flag context: the word completes as the positional at its index.
    match grammar.positionals().get(last_index) {
        Some(positional) => positional.suggest(last),
        None => Vec::new(),
    }
}
