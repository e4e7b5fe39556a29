use logos::Logos;

use crate::frontend::lexer::token::Literal;

/// A raw lexical match, before it is stamped with positions.
///
/// This is the `logos`-generated recognizer. It decides *what* a stretch of
/// source text is; [`Lexer`](super::Lexer) decides *where* it is and turns it
/// into a [`Token`](super::token::Token).
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t\r]+")]
pub enum RawToken {
    /// `# comment`, up to and including the line break. A comment on the last
    /// line simply runs to the end of input.
    #[regex(r"#[^\n]*\n?", logos::skip)]
    Comment,
    /// `;` or a line break.
    #[token(";")]
    #[token("\n")]
    Newline,
    /// Any run of digits and dots that starts with a digit.
    #[regex(r"[0-9][0-9.]*", scan_number)]
    Number(Literal),
    /// A string literal; the callback consumes everything up to the closing
    /// quote.
    #[token("\"", scan_string)]
    Str(String),
    /// An identifier or keyword.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `->`
    #[token("->")]
    Arrow,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `,`
    #[token(",")]
    Comma,
    /// `!` on its own; only valid as the start of `!=`.
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    DoubleEquals,
    /// `<`
    #[token("<")]
    LessThan,
    /// `<=`
    #[token("<=")]
    LessThanOrEqual,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `>=`
    #[token(">=")]
    GreaterThanOrEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBrack,
    /// `]`
    #[token("]")]
    RBrack,
}

/// Failures detected by the raw scanner.
///
/// `Unrecognized` is what `logos` reports for input no pattern matches; the
/// other variants come from the literal callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanError {
    /// No token starts with this character.
    #[default]
    Unrecognized,
    /// A number with two or more decimal points.
    MultipleDecimalPoints,
    /// An integer that does not fit into an `i64`.
    IntegerOverflow,
    /// An unsupported character after a backslash.
    InvalidEscape(char),
    /// The input ended inside a string literal.
    UnterminatedString,
}

/// Converts a digit-and-dot run into an integer or float literal.
///
/// # Returns
/// - `Ok(Literal::Int)` when the slice has no decimal point.
/// - `Ok(Literal::Float)` when it has exactly one.
/// - `Err(ScanError::MultipleDecimalPoints)` when it has more; the whole run
///   has been consumed by then, so the error span covers the full literal.
fn scan_number(lex: &logos::Lexer<RawToken>) -> Result<Literal, ScanError> {
    let slice = lex.slice();
    match slice.matches('.').count() {
        0 => slice.parse::<i64>()
                  .map(Literal::Int)
                  .map_err(|_| ScanError::IntegerOverflow),
        1 => slice.parse::<f64>()
                  .map(Literal::from)
                  .map_err(|_| ScanError::MultipleDecimalPoints),
        _ => Err(ScanError::MultipleDecimalPoints),
    }
}

/// Scans the body of a string literal after its opening quote.
///
/// The lexer is bumped past everything consumed, so on success the token span
/// ends after the closing quote, and on failure it ends after the offending
/// escape (or at the end of input).
fn scan_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, ScanError> {
    let (consumed, result) = unescape_body(lex.remainder());
    lex.bump(consumed);
    result
}

/// Reads string content from `body` until an unescaped `"`.
///
/// Returns the number of bytes consumed (including the closing quote) together
/// with the processed text or the reason scanning stopped.
fn unescape_body(body: &str) -> (usize, Result<String, ScanError>) {
    let mut text = String::new();
    let mut chars = body.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => return (offset + 1, Ok(text)),
            '\\' => match chars.next() {
                Some((escape_offset, escaped)) => match escape_char(escaped) {
                    Some(resolved) => text.push(resolved),
                    None => {
                        return (escape_offset + escaped.len_utf8(),
                                Err(ScanError::InvalidEscape(escaped)));
                    },
                },
                None => return (body.len(), Err(ScanError::UnterminatedString)),
            },
            _ => text.push(ch),
        }
    }

    (body.len(), Err(ScanError::UnterminatedString))
}

/// Maps the character after a backslash to the character it stands for.
const fn escape_char(escaped: char) -> Option<char> {
    match escaped {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        _ => None,
    }
}
