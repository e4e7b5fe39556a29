/// The reserved-word table.
///
/// Lists the keywords of the language and classifies scanned words as
/// keywords or identifiers.
pub mod keywords;
/// The raw `logos` scanner.
///
/// Recognizes numbers, strings, words, operators, separators and comments in
/// the source text, and processes string escapes. It knows nothing about
/// lines or columns.
pub mod scanner;
/// Token types.
///
/// Defines [`token::Token`], its [`token::TokenKind`] tag and the
/// [`token::Literal`] payload carried by literal tokens.
pub mod token;

use std::sync::Arc;

use logos::Logos;

use crate::{
    error::{Diagnostic, ErrorKind},
    frontend::lexer::{
        keywords::is_keyword,
        scanner::{RawToken, ScanError},
        token::{Token, TokenKind},
    },
    position::{DEFAULT_FILENAME, Position},
};

/// Result type of a lexing pass.
pub type LexResult<T> = Result<T, Diagnostic>;

/// Turns source text into a sequence of position-stamped tokens.
///
/// A `Lexer` is single use: [`Lexer::make_tokens`] consumes it.
pub struct Lexer {
    text:   Arc<str>,
    cursor: Position,
}

impl Lexer {
    /// Creates a lexer for text typed at the prompt (`<STDIN>`).
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::with_filename(source, DEFAULT_FILENAME)
    }

    /// Creates a lexer for text read from `filename`.
    #[must_use]
    pub fn with_filename(source: &str, filename: &str) -> Self {
        let cursor = Position::new(filename, source);
        Self { text: Arc::clone(&cursor.file_text),
               cursor }
    }

    /// Scans the whole input.
    ///
    /// Tokens come back in source order, followed by exactly one `EOF` token
    /// whose start and end are the final cursor position. Whitespace and
    /// comments produce no tokens.
    ///
    /// # Errors
    /// Returns the first [`Diagnostic`] encountered; scanning stops there.
    ///
    /// # Example
    /// ```
    /// use shork::frontend::lexer::{Lexer, token::TokenKind};
    ///
    /// let tokens = Lexer::new("a -> 2").make_tokens().unwrap();
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
    /// assert_eq!(kinds,
    ///            [TokenKind::Identifier, TokenKind::Arrow, TokenKind::Int, TokenKind::Eof]);
    /// ```
    pub fn make_tokens(mut self) -> LexResult<Vec<Token>> {
        let text = Arc::clone(&self.text);
        let mut raw = RawToken::lexer(&*text);
        let mut tokens = Vec::new();

        while let Some(result) = raw.next() {
            let span = raw.span();
            let start = self.advance_to(span.start);

            let token = match result {
                Ok(raw_token) => {
                    let end = self.advance_to(span.end);
                    self.classify(raw_token, start.clone(), end)
                },
                // An unrecognized match covers exactly one character, whatever
                // span the scanner reports.
                Err(ScanError::Unrecognized) => {
                    let character = text[span.start..].chars().next().unwrap_or('\0');
                    self.cursor.advance(Some(character));
                    Err(ErrorKind::IllegalCharacter { character })
                },
                Err(error) => {
                    self.advance_to(span.end);
                    Err(Self::scan_error(error, &text[span.start..span.end]))
                },
            };

            match token {
                Ok(token) => {
                    tracing::trace!(%token, "scanned token");
                    tokens.push(token);
                },
                Err(kind) => return Err(self.abort(kind, start)),
            }
        }

        let eof = self.cursor.clone();
        tokens.push(Token::new(TokenKind::Eof, eof.clone(), eof));
        tracing::debug!(filename = %self.cursor.filename,
                        count = tokens.len(),
                        "tokenized source");
        Ok(tokens)
    }

    /// Walks the cursor forward, one character at a time, to byte offset
    /// `target`, and returns a copy of it.
    fn advance_to(&mut self, target: usize) -> Position {
        let from = self.cursor.index;
        for ch in self.text[from..target].chars() {
            self.cursor.advance(Some(ch));
        }
        self.cursor.clone()
    }

    /// Builds the token for a successful raw match.
    fn classify(&self,
                raw_token: RawToken,
                start: Position,
                end: Position)
                -> Result<Token, ErrorKind> {
        let kind = match raw_token {
            RawToken::Number(literal) => return Ok(Token::literal(literal, start, end)),
            RawToken::Str(text) => return Ok(Token::literal(text.into(), start, end)),
            RawToken::Bang => {
                let found = self.text[end.index..].chars().next();
                return Err(ErrorKind::ExpectedCharacter { expected: '=', found });
            },
            RawToken::Word => {
                if is_keyword(&self.text[start.index..end.index]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            },
            RawToken::Comment => unreachable!("comments are skipped by the scanner"),
            RawToken::Newline => TokenKind::Newline,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Comma => TokenKind::Comma,
            RawToken::NotEqual => TokenKind::NotEqual,
            RawToken::Equals => TokenKind::Equals,
            RawToken::DoubleEquals => TokenKind::DoubleEquals,
            RawToken::LessThan => TokenKind::LessThan,
            RawToken::LessThanOrEqual => TokenKind::LessThanOrEqual,
            RawToken::GreaterThan => TokenKind::GreaterThan,
            RawToken::GreaterThanOrEqual => TokenKind::GreaterThanOrEqual,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBrack => TokenKind::LBrack,
            RawToken::RBrack => TokenKind::RBrack,
        };

        Ok(Token::new(kind, start, end))
    }

    /// Maps a scanner failure to its error kind. `slice` is the source text
    /// the scanner consumed before giving up.
    fn scan_error(error: ScanError, slice: &str) -> ErrorKind {
        match error {
            ScanError::MultipleDecimalPoints => ErrorKind::MultipleDecimalPoints,
            ScanError::IntegerOverflow => ErrorKind::LiteralTooLarge { literal: slice.to_string() },
            ScanError::InvalidEscape(character) => ErrorKind::InvalidEscapeSequence { character },
            ScanError::UnterminatedString => ErrorKind::UnterminatedString,
            ScanError::Unrecognized => {
                ErrorKind::IllegalCharacter { character: slice.chars().next().unwrap_or('\0') }
            },
        }
    }

    /// Wraps `kind` into a diagnostic spanning `start` to the current cursor.
    fn abort(&self, kind: ErrorKind, start: Position) -> Diagnostic {
        let diagnostic = Diagnostic::new(kind, start, self.cursor.clone());
        tracing::debug!(error = diagnostic.name(),
                        line = diagnostic.start.line + 1,
                        "lexing aborted");
        diagnostic
    }
}
