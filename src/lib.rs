//! # shork
//!
//! shork is the front end of the Shork scripting language, written in Rust.
//! It turns source text into position-stamped tokens and parses those tokens
//! into an abstract syntax tree, reporting the first lexical or syntax error
//! with its exact location.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::Diagnostic,
    frontend::{
        lexer::{Lexer, token::Token},
        parser::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum, the tree the parser builds.
/// Every node can report the source span it covers.
pub mod ast;
/// Provides the diagnostics raised while lexing and parsing.
///
/// This module defines the closed set of error kinds and the [`Diagnostic`]
/// that pairs a kind with the source span it refers to.
///
/// # Responsibilities
/// - Classifies every failure the front end can report.
/// - Renders diagnostics as `"<kind>: <message>\nFile: <file>, line <n>"`.
/// - Points at the offending source text for interactive display.
pub mod error;
/// Turns source text into a syntax tree.
///
/// # Responsibilities
/// - Scans text into tokens stamped with their start and end positions.
/// - Parses tokens by recursive descent, with speculative alternatives.
pub mod frontend;
/// Source locations.
///
/// [`position::Position`] is a cursor over one source text, tracking offset,
/// line and column together.
pub mod position;

/// Tokenizes `source`, attributing positions to `filename`.
///
/// The returned tokens always end with a single `EOF` token.
///
/// # Errors
/// Returns the first lexical error.
///
/// # Examples
/// ```
/// use shork::tokenize;
///
/// let tokens = tokenize("VAR x = 5", "<STDIN>").unwrap();
/// let shown: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(shown, ["[KEYWORD, VAR]", "[IDENTIFIER, x]", "[EQUALS]", "[INT, 5]", "[EOF]"]);
///
/// let error = tokenize("1.2.3", "<STDIN>").unwrap_err();
/// assert_eq!(error.name(), "Multiple Decimal Points");
/// ```
pub fn tokenize(source: &str, filename: &str) -> Result<Vec<Token>, Diagnostic> {
    Lexer::with_filename(source, filename).make_tokens()
}

/// Tokenizes and parses `source`, attributing positions to `filename`.
///
/// A program with a single statement yields that statement's node; otherwise
/// the statements are wrapped in a [`Node::List`].
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use shork::parse;
///
/// let ast = parse("2 ^ 3 ^ 2", "<STDIN>").unwrap();
/// assert_eq!(ast.to_string(), "([INT, 2] [CARET] ([INT, 3] [CARET] [INT, 2]))");
///
/// let error = parse("1 +", "script.shk").unwrap_err();
/// assert!(error.to_string().ends_with("File: script.shk, line 1"));
/// ```
pub fn parse(source: &str, filename: &str) -> Result<Node, Diagnostic> {
    let tokens = tokenize(source, filename)?;
    Parser::new(tokens).parse()
}
