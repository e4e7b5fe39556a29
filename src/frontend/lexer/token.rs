use std::fmt;

use ordered_float::OrderedFloat;

use crate::position::Position;

/// The kind of a token.
///
/// Literal kinds carry a [`Literal`] payload on their [`Token`]; every other
/// kind carries none.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, e.g. `42`.
    Int,
    /// Floating-point literal, e.g. `3.14`.
    Float,
    /// String literal, e.g. `"hi\n"`.
    String,
    /// A name that is not reserved.
    Identifier,
    /// A reserved word from the keyword table.
    Keyword,
    /// Statement separator, `;` or a line break.
    Newline,
    /// End of input.
    Eof,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Asterisk,
    /// `^`
    Caret,
    /// `%`
    Percent,
    /// `,`
    Comma,
    /// `->`
    Arrow,
    /// `=`
    Equals,
    /// `==`
    DoubleEquals,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `!=`
    NotEqual,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
}

impl TokenKind {
    /// Returns `true` for the kinds that carry a literal payload.
    #[must_use]
    pub const fn has_value(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::String)
    }

    /// The upper-case name used when printing tokens, e.g. `DOUBLE_EQUALS`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::Keyword => "KEYWORD",
            Self::Newline => "NEWLINE",
            Self::Eof => "EOF",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Slash => "SLASH",
            Self::Asterisk => "ASTERISK",
            Self::Caret => "CARET",
            Self::Percent => "PERCENT",
            Self::Comma => "COMMA",
            Self::Arrow => "ARROW",
            Self::Equals => "EQUALS",
            Self::DoubleEquals => "DOUBLE_EQUALS",
            Self::LessThan => "LESS_THAN",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBrack => "LBRACK",
            Self::RBrack => "RBRACK",
        }
    }

    /// How the token is written in source, for use in error messages.
    /// Kinds without a fixed spelling return their name.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Slash => "'/'",
            Self::Asterisk => "'*'",
            Self::Caret => "'^'",
            Self::Percent => "'%'",
            Self::Comma => "','",
            Self::Arrow => "'->'",
            Self::Equals => "'='",
            Self::DoubleEquals => "'=='",
            Self::LessThan => "'<'",
            Self::LessThanOrEqual => "'<='",
            Self::GreaterThan => "'>'",
            Self::GreaterThanOrEqual => "'>='",
            Self::NotEqual => "'!='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBrack => "'['",
            Self::RBrack => "']'",
            Self::Newline => "newline",
            Self::Eof => "end of input",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of a literal token.
///
/// Floats are wrapped in [`OrderedFloat`] so literals (and with them tokens and
/// whole trees) have total equality and can be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(OrderedFloat<f64>),
    /// A string with its escapes already processed.
    Str(String),
}

impl Literal {
    /// The token kind a literal of this shape is lexed as.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Int(_) => TokenKind::Int,
            Self::Float(_) => TokenKind::Float,
            Self::Str(_) => TokenKind::String,
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{:?}", n.0),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A classified, position-stamped unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind:  TokenKind,
    value: Option<Literal>,
    start: Position,
    end:   Position,
}

impl Token {
    /// Creates a token without a payload.
    ///
    /// # Panics
    /// Panics if `kind` is a literal kind; use [`Token::literal`] for those.
    #[must_use]
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        assert!(!kind.has_value(), "{kind} tokens must carry a literal value");
        Self { kind,
               value: None,
               start,
               end }
    }

    /// Creates a literal token. The kind follows from the payload.
    #[must_use]
    pub fn literal(value: Literal, start: Position, end: Position) -> Self {
        Self { kind: value.kind(),
               value: Some(value),
               start,
               end }
    }

    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The literal payload; `Some` exactly for `INT`, `FLOAT` and `STRING`.
    #[must_use]
    pub const fn value(&self) -> Option<&Literal> {
        self.value.as_ref()
    }

    /// Where the token starts.
    #[must_use]
    pub const fn start(&self) -> &Position {
        &self.start
    }

    /// Where the token ends (exclusive).
    #[must_use]
    pub const fn end(&self) -> &Position {
        &self.end
    }

    /// The exact source text the token covers.
    ///
    /// For identifiers and keywords this is the name itself.
    ///
    /// # Example
    /// ```
    /// use shork::tokenize;
    ///
    /// let tokens = tokenize("VAR total = 1", "<STDIN>").unwrap();
    /// assert_eq!(tokens[0].lexeme(), "VAR");
    /// assert_eq!(tokens[1].lexeme(), "total");
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.start.file_text[self.start.index..self.end.index]
    }

    /// Returns `true` if the token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns `true` if the token is the given reserved word.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme() == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.kind) {
            (Some(value), kind) => write!(f, "[{kind}, {value}]"),
            (None, kind @ (TokenKind::Identifier | TokenKind::Keyword)) => {
                write!(f, "[{kind}, {}]", self.lexeme())
            },
            (None, kind) => write!(f, "[{kind}]"),
        }
    }
}
