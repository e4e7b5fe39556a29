#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way lexing or parsing can fail.
pub enum ErrorKind {
    /// A character that cannot start any token.
    IllegalCharacter {
        /// The offending character.
        character: char,
    },
    /// A numeric literal contained more than one `.`.
    MultipleDecimalPoints,
    /// A backslash inside a string was followed by an unsupported character.
    InvalidEscapeSequence {
        /// The character following the backslash.
        character: char,
    },
    /// The second character of a two-character operator was wrong.
    ExpectedCharacter {
        /// The character the operator requires.
        expected: char,
        /// What was found instead; `None` at the end of input.
        found:    Option<char>,
    },
    /// The input ended before a string literal was closed.
    UnterminatedString,
    /// An integer literal does not fit into an `i64`.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal: String,
    },
    /// The token sequence cannot be derived from the grammar.
    SyntaxError {
        /// What the parser expected at this point.
        details: String,
    },
}

impl ErrorKind {
    /// Returns the human-readable name of the error kind, as shown in front of
    /// every rendered diagnostic.
    ///
    /// # Example
    /// ```
    /// use shork::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::MultipleDecimalPoints.name(), "Multiple Decimal Points");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IllegalCharacter { .. } => "Illegal Character",
            Self::MultipleDecimalPoints => "Multiple Decimal Points",
            Self::InvalidEscapeSequence { .. } => "Invalid Escape Sequence",
            Self::ExpectedCharacter { .. } => "Expected Character",
            Self::UnterminatedString => "Unterminated String",
            Self::LiteralTooLarge { .. } => "Literal Too Large",
            Self::SyntaxError { .. } => "Syntax Error",
        }
    }

    /// Shorthand for a [`ErrorKind::SyntaxError`] with the given details.
    pub fn syntax(details: impl Into<String>) -> Self {
        Self::SyntaxError { details: details.into() }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character } => {
                write!(f, "Invalid character '{}'.", character.escape_debug())
            },
            Self::MultipleDecimalPoints => {
                write!(f, "Number should have either 0 or 1 decimal points.")
            },
            Self::InvalidEscapeSequence { character } => write!(f,
                                                                "'\\{}' is not a valid escape sequence.",
                                                                character.escape_debug()),
            Self::ExpectedCharacter { expected,
                                      found: Some(found), } => {
                write!(f, "Expected '{expected}', found '{}'.", found.escape_debug())
            },
            Self::ExpectedCharacter { expected, found: None } => {
                write!(f, "Expected '{expected}', found end of input.")
            },
            Self::UnterminatedString => {
                write!(f, "String literal is missing its closing '\"'.")
            },
            Self::LiteralTooLarge { literal } => {
                write!(f, "Integer literal {literal} is too large.")
            },
            Self::SyntaxError { details } => write!(f, "{details}"),
        }
    }
}
