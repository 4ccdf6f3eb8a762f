//! Main CLI application
//!
//! A small inspection tool around the library: load a YAML grammar
//! declaration, then parse a command line against it or list completion
//! suggestions for a partial one.

use crate::grammar::{load_spec_file, Grammar};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use std::path::PathBuf;

/// Build the clap command
fn build_command() -> Command {
    Command::new("gramline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect a command grammar: parse a line or suggest completions")
        .arg(
            Arg::new("grammar")
                .short('g')
                .long("grammar")
                .value_name("FILE")
                .help("Path to a YAML grammar declaration")
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a command line against the grammar")
                .arg(
                    Arg::new("line")
                        .value_name("LINE")
                        .help("The command line to parse")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("complete")
                .about("Suggest completions for a partially-typed command line")
                .arg(
                    Arg::new("line")
                        .value_name("LINE")
                        .help("The partial command line")
                        .required(true),
                ),
        )
}

/// Load the grammar named by --grammar
fn load_grammar(matches: &ArgMatches) -> Result<Grammar> {
    let path = matches
        .get_one::<String>("grammar")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("no grammar file given (use --grammar <FILE>)"))?;

    let spec = load_spec_file(&path)
        .with_context(|| format!("failed to load grammar from {}", path.display()))?;

    Grammar::from_spec(&spec)
        .with_context(|| format!("invalid grammar in {}", path.display()))
}

/// Render a parsed line, positionals first, declaration order throughout
fn render_parsed(grammar: &Grammar, parsed: &crate::engine::ParsedLine) -> String {
    let mut out = String::new();

    for positional in grammar.positionals() {
        out.push_str(&render_binding(&positional.label, parsed.get(&positional.label)));
    }
    for flag in grammar.flags() {
        out.push_str(&render_binding(&flag.label, parsed.get(&flag.label)));
    }

    out
}

fn render_binding(label: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{} = {}\n", label.cyan(), value),
        None => format!("{} = {}\n", label.cyan(), "(absent)".dimmed()),
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let mut command = build_command();
    let matches = command.clone().get_matches();

    let Some((name, sub_matches)) = matches.subcommand() else {
        command.print_help()?;
        println!();
        return Ok(());
    };

    let grammar = load_grammar(&matches)?;
    let line = sub_matches
        .get_one::<String>("line")
        .expect("line is a required argument");

    match name {
        "parse" => {
            let parsed = grammar.parse(line)?;
            print!("{}", render_parsed(&grammar, &parsed));
        }
        "complete" => {
            for suggestion in grammar.suggest(line) {
                println!("{}", suggestion);
            }
        }
        _ => unreachable!("unknown subcommand: {name}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_parses_subcommands() {
        let matches = build_command().get_matches_from(vec![
            "gramline",
            "--grammar",
            "deploy.yml",
            "parse",
            "prod --env staging",
        ]);

        assert_eq!(
            matches.get_one::<String>("grammar").map(String::as_str),
            Some("deploy.yml")
        );

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "parse");
        assert_eq!(
            sub.get_one::<String>("line").map(String::as_str),
            Some("prod --env staging")
        );
    }

    #[test]
    fn test_grammar_flag_is_global() {
        let matches = build_command().get_matches_from(vec![
            "gramline",
            "complete",
            "prod --",
            "--grammar",
            "deploy.yml",
        ]);

        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            sub.get_one::<String>("grammar").map(String::as_str),
            Some("deploy.yml")
        );
    }

    #[test]
    fn test_render_parsed_orders_positionals_first() {
        let mut grammar = Grammar::new();
        grammar.register(&["target"], None, None).unwrap();
        grammar.register(&["--env"], None, None).unwrap();

        let parsed = grammar.parse("prod --env staging").unwrap();
        let rendered = render_parsed(&grammar, &parsed);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("target"));
        assert!(lines[0].contains("prod"));
        assert!(lines[1].contains("env"));
        assert!(lines[1].contains("staging"));
    }

    #[test]
    fn test_render_parsed_marks_absent_flags() {
        let mut grammar = Grammar::new();
        grammar.register(&["--env"], None, None).unwrap();

        let parsed = grammar.parse("").unwrap();
        let rendered = render_parsed(&grammar, &parsed);
        assert!(rendered.contains("(absent)"));
    }

    #[test]
    fn test_load_grammar_requires_path() {
        let matches = build_command().get_matches_from(vec!["gramline", "parse", "x"]);
        let result = load_grammar(&matches);
        assert!(result.is_err());
    }
}
