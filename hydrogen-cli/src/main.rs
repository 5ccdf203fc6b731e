//! Hydrogen CLI
//!
//! Parses a page once at startup and prints what a renderer would receive:
//! the node forest, the raw token stream, or the reason loading failed.

use anyhow::{Context, Result};
use clap::Parser;
use hydrogen_common::warning::{clear_warnings, set_warnings_enabled};
use hydrogen_dom::Forest;
use hydrogen_html::{ParseIssue, Tokenizer, TreeBuilder, read_file};
use owo_colors::OwoColorize;

/// Hydrogen — parse a small HTML page and dump the result
#[derive(Parser, Debug)]
#[command(name = "hydrogen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the node tree of a page
    hydrogen resources/TheProject.html

    # Dump the tree as JSON
    hydrogen --json resources/TheProject.html

    # Show the token stream
    hydrogen --tokens --html '<A HREF="WhatIs.html">What</A>'
"#)]
struct Cli {
    /// Path to the HTML file to open
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<String>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the forest as JSON instead of an indented tree
    #[arg(long)]
    json: bool,

    /// Print the token stream instead of the tree
    #[arg(long, conflicts_with = "json")]
    tokens: bool,

    /// List the malformed markup the parser recovered from
    #[arg(long)]
    issues: bool,

    /// Do not print warnings while parsing
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_warnings_enabled(!cli.quiet);

    let source = load_source(&cli)?;
    clear_warnings();

    if cli.tokens {
        print_tokens(source);
        return Ok(());
    }

    let (forest, issues) = TreeBuilder::new(Tokenizer::new(source)).run_with_issues();

    if cli.json {
        let json = serde_json::to_string_pretty(&forest).context("failed to encode forest")?;
        println!("{json}");
    } else {
        print_forest(&forest);
    }

    if cli.issues {
        print_issues(&issues);
    }

    Ok(())
}

/// Load markup from CLI arguments
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        read_file(path).with_context(|| format!("could not load {path}"))
    } else {
        anyhow::bail!("a file path or --html is required")
    }
}

fn print_tokens(source: String) {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.run();
    for token in tokenizer.into_tokens() {
        println!("{:<14} {:?}", token.kind.to_string(), token.text);
    }
}

fn print_forest(forest: &Forest) {
    if forest.is_empty() {
        println!("{}", "(empty document)".dimmed());
        return;
    }
    for node in forest {
        print!("{node}");
    }
}

fn print_issues(issues: &[ParseIssue]) {
    println!("\n=== Parse Issues ===");
    if issues.is_empty() {
        println!("  none");
    }
    for issue in issues {
        if issue.is_error {
            println!("  - {} {}", "error:".red(), issue.message);
        } else {
            println!("  - {} {}", "warning:".yellow(), issue.message);
        }
    }
}
