use crate::{
    frontend::lexer::token::{Token, TokenKind},
    position::{DEFAULT_FILENAME, Position},
};

/// A read-only cursor over a token sequence.
///
/// The cursor is a plain `Copy` value: grammar rules receive it by `&mut`,
/// and a rule that wants to backtrack keeps a copy and restores it. Nothing
/// about parsing state lives anywhere else, including the current nesting
/// depth.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    index:  usize,
    depth:  usize,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor on the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               index: 0,
               depth: 0 }
    }

    /// The token under the cursor, or `None` past the end of the sequence.
    #[must_use]
    pub fn current_token(&self) -> Option<&'t Token> {
        self.tokens.get(self.index)
    }

    /// The token `offset` places ahead of the cursor.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.index + offset)
    }

    /// Moves the cursor forward by one token. The cursor never moves more
    /// than one place past the last token.
    pub const fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// How many tokens have been consumed.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// How many groupings, lists and prefix operators enclose the cursor.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Steps into a nested construct.
    pub const fn enter(&mut self) {
        self.depth += 1;
    }

    /// Steps out of a nested construct.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns `true` if a comment sits between the previous token and the
    /// current one.
    #[must_use]
    pub fn follows_comment(&self) -> bool {
        let (Some(previous), Some(current)) =
            (self.index.checked_sub(1).and_then(|i| self.tokens.get(i)), self.current_token())
        else {
            return false;
        };
        current.start()
               .file_text
               .get(previous.end().index..current.start().index)
               .is_some_and(|gap| gap.contains('#'))
    }

    /// Returns `true` if the current token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token().is_some_and(|token| token.is(kind))
    }

    /// Returns `true` if the current token is the given reserved word.
    #[must_use]
    pub fn check_keyword(&self, word: &str) -> bool {
        self.current_token().is_some_and(|token| token.is_keyword(word))
    }

    /// The end of the last token, used to place diagnostics once the
    /// sequence is exhausted.
    #[must_use]
    pub fn last_position(&self) -> Position {
        self.tokens
            .last()
            .map_or_else(|| Position::new(DEFAULT_FILENAME, ""), |token| token.end().clone())
    }
}
