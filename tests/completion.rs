//! Integration tests for the completion engine

use gramline::grammar::{Completer, Grammar};

fn fixed(candidates: &'static [&'static str]) -> Completer {
    Box::new(move |_| candidates.iter().map(|c| c.to_string()).collect())
}

#[test]
fn test_flag_name_prefix_completion() {
    let mut grammar = Grammar::new();
    grammar.register(&["target"], None, None).unwrap();
    grammar.register(&["--force"], None, None).unwrap();
    grammar.register(&["--flag"], None, None).unwrap();

    // Declaration order, never duplicated
    assert_eq!(grammar.suggest("prod --f"), vec!["--force", "--flag"]);
    assert_eq!(grammar.suggest("prod --fl"), vec!["--flag"]);
}

#[test]
fn test_terminated_flag_claims_empty_value() {
    let mut grammar = Grammar::new();
    grammar
        .register(&["target"], Some(fixed(&["alpha", "beta"])), None)
        .unwrap();
    grammar.register(&["--flag1"], Some(fixed(&[])), None).unwrap();

    // The trailing space ends the flag token, so the engine must ask
    // --flag1 for its (empty) value suggestions instead of falling
    // through to the positional at that index.
    assert_eq!(grammar.suggest("val1 --flag1 "), Vec::<String>::new());
}

#[test]
fn test_single_token_completes_first_positional() {
    let mut grammar = Grammar::new();
    grammar
        .register(&["target"], Some(fixed(&["x", "y"])), None)
        .unwrap();

    assert_eq!(grammar.suggest("p"), vec!["x", "y"]);
}

#[test]
fn test_completion_after_parsed_flags() {
    let mut grammar = Grammar::new();
    grammar.register(&["target"], None, None).unwrap();
    grammar
        .register(&["--env"], Some(fixed(&["staging", "production"])), None)
        .unwrap();
    grammar.register(&["--tag"], None, None).unwrap();

    // --tag has no completer, so the scan keeps walking left to --env.
    assert_eq!(
        grammar.suggest("prod --env x --tag v"),
        vec!["staging", "production"]
    );
}

#[test]
fn test_completion_never_errors() {
    let grammar = Grammar::new();

    assert!(grammar.suggest("anything at all").is_empty());
    assert!(grammar.suggest("--unknown").is_empty());
    assert!(grammar.suggest("").is_empty());
}
