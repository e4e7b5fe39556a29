/// The reserved words of the language, in table order.
///
/// An identifier whose text matches one of these exactly (case-sensitive) is
/// lexed as a [`TokenKind::Keyword`](super::token::TokenKind::Keyword).
pub const KEYWORDS: [&str; 17] = ["VAR", "AND", "OR", "NOT", "IF", "ELIF", "ELSE", "FUN", "FOR",
                                  "TO", "STEP", "WHILE", "THEN", "END", "RETURN", "CONTINUE",
                                  "BREAK"];

/// Returns `true` if `word` is a reserved word.
///
/// # Example
/// ```
/// use shork::frontend::lexer::keywords::is_keyword;
///
/// assert!(is_keyword("WHILE"));
/// assert!(!is_keyword("while"));
/// assert!(!is_keyword("WHILEX"));
/// ```
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
