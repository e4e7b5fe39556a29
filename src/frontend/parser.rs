/// Parser plumbing.
///
/// Defines [`core::ParseResult`], the expression entry point, the
/// [`core::speculate`] combinator and syntax-error construction.
pub mod core;

/// The token cursor.
///
/// A copyable position in a token slice; backtracking is restoring a copy.
pub mod cursor;

/// Binary operators.
///
/// One rule per precedence level, from `OR` down to `^`.
pub mod binary;

/// Unary operators and atoms.
///
/// Handles negation, `NOT`, literals, variables, parentheses and list
/// literals.
pub mod unary;

/// Statements.
///
/// Programs, statement separators and variable assignment.
pub mod statement;

/// Utility functions for the parser.
pub mod utils;

use crate::{
    ast::Node,
    frontend::{
        lexer::token::{Token, TokenKind},
        parser::{core::ParseResult, cursor::TokenCursor, statement::parse_program},
    },
    position::{DEFAULT_FILENAME, Position},
};

/// Builds an AST from a token sequence.
///
/// The parser owns its tokens and never changes them; each call to
/// [`Parser::parse`] starts over from the first token, so a parser can be
/// run any number of times.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    /// Creates a parser over `tokens`, which should end with an `EOF` token as
    /// produced by [`Lexer::make_tokens`](crate::frontend::lexer::Lexer::make_tokens).
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens being parsed.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Parses the tokens into a single root node.
    ///
    /// - A program with one statement yields that statement's node.
    /// - Anything else yields a [`Node::List`] of the statements, spanning
    ///   from the first to the last one. An empty program gives an empty list
    ///   positioned at `EOF`.
    ///
    /// # Errors
    /// Returns the first syntax error found.
    ///
    /// # Example
    /// ```
    /// use shork::frontend::{lexer::Lexer, parser::Parser};
    ///
    /// let tokens = Lexer::new("1 + 2 * 3").make_tokens().unwrap();
    /// let ast = Parser::new(tokens).parse().unwrap();
    /// assert_eq!(ast.to_string(), "([INT, 1] [PLUS] ([INT, 2] [ASTERISK] [INT, 3]))");
    /// ```
    pub fn parse(&self) -> ParseResult<Node> {
        let mut statements = self.parse_statements()?;

        if statements.len() == 1
           && let Some(only) = statements.pop()
        {
            return Ok(only);
        }

        let eof = self.end_position();
        let start = statements.first().map_or_else(|| eof.clone(), |node| node.start().clone());
        let end = statements.last().map_or(eof, |node| node.end().clone());
        Ok(Node::List { elements: statements,
                        start,
                        end })
    }

    /// Parses the tokens into their list of statements.
    ///
    /// # Errors
    /// Returns the first syntax error found.
    pub fn parse_statements(&self) -> ParseResult<Vec<Node>> {
        let mut cursor = TokenCursor::new(&self.tokens);
        match parse_program(&mut cursor) {
            Ok(statements) => {
                tracing::debug!(statements = statements.len(),
                                tokens = cursor.index(),
                                "parsed program");
                Ok(statements)
            },
            Err(diagnostic) => {
                tracing::debug!(error = %diagnostic.kind,
                                line = diagnostic.start.line + 1,
                                column = diagnostic.start.column,
                                "parsing aborted");
                Err(diagnostic)
            },
        }
    }

    /// Where the program ends: the `EOF` token, or the end of whatever token
    /// comes last.
    fn end_position(&self) -> Position {
        self.tokens
            .iter()
            .find(|token| token.is(TokenKind::Eof))
            .or_else(|| self.tokens.last())
            .map_or_else(|| Position::new(DEFAULT_FILENAME, ""), |token| token.start().clone())
    }
}
