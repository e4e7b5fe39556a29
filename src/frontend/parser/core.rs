use crate::{
    ast::Node,
    error::{Diagnostic, ErrorKind},
    frontend::{
        lexer::token::{Token, TokenKind},
        parser::{binary::parse_logical_or, cursor::TokenCursor},
    },
};

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_logical_or(cursor)
}

/// Tries a grammar rule that may not apply at the current position.
///
/// - If `rule` succeeds, its node is returned as `Some`.
/// - If `rule` fails without consuming a token, the cursor is left where it
///   was and `None` is returned, so the caller can try another alternative.
/// - If `rule` fails after consuming at least one token, the input has
///   committed to this rule and the error is returned as-is.
///
/// # Example
/// ```
/// use shork::{
///     frontend::{
///         lexer::Lexer,
///         parser::{core::{parse_expression, speculate}, cursor::TokenCursor},
///     },
/// };
///
/// let tokens = Lexer::new(")").make_tokens().unwrap();
/// let mut cursor = TokenCursor::new(&tokens);
/// assert_eq!(speculate(&mut cursor, parse_expression).unwrap(), None);
/// assert_eq!(cursor.index(), 0);
///
/// let tokens = Lexer::new("(1").make_tokens().unwrap();
/// let mut cursor = TokenCursor::new(&tokens);
/// assert!(speculate(&mut cursor, parse_expression).is_err());
/// ```
pub fn speculate<'t, T>(cursor: &mut TokenCursor<'t>,
                        rule: impl FnOnce(&mut TokenCursor<'t>) -> ParseResult<T>)
                        -> ParseResult<Option<T>> {
    let checkpoint = *cursor;
    match rule(cursor) {
        Ok(node) => Ok(Some(node)),
        Err(_) if cursor.index() == checkpoint.index() => {
            *cursor = checkpoint;
            Ok(None)
        },
        Err(error) => Err(error),
    }
}

/// How deeply groupings, lists and prefix operators may nest before parsing
/// gives up with a syntax error instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Runs `rule` one nesting level deeper.
///
/// Called right after the token that opens the nested construct has been
/// consumed, so the error below always counts as committed input.
///
/// # Errors
/// Returns a syntax error at the current token once [`MAX_NESTING_DEPTH`]
/// would be exceeded, and otherwise whatever `rule` returns.
pub(in crate::frontend::parser) fn parse_nested<'t, T>(cursor: &mut TokenCursor<'t>,
                                                       rule: impl FnOnce(&mut TokenCursor<'t>)
                                                                         -> ParseResult<T>)
                                                       -> ParseResult<T> {
    if cursor.depth() >= MAX_NESTING_DEPTH {
        let (start, end) = match cursor.current_token() {
            Some(token) => (token.start().clone(), token.end().clone()),
            None => (cursor.last_position(), cursor.last_position()),
        };
        let details =
            format!("Expression nesting is too deep (maximum {MAX_NESTING_DEPTH} levels).");
        return Err(Diagnostic::new(ErrorKind::syntax(details), start, end));
    }

    cursor.enter();
    let result = rule(cursor);
    cursor.leave();
    result
}

/// Consumes the current token if it has the given kind.
///
/// # Errors
/// Returns a syntax error reading `"<expected>, found <token>."` otherwise.
pub(in crate::frontend::parser) fn expect<'t>(cursor: &mut TokenCursor<'t>,
                                              kind: TokenKind,
                                              expected: &str)
                                              -> ParseResult<&'t Token> {
    match cursor.current_token() {
        Some(token) if token.is(kind) => {
            cursor.advance();
            Ok(token)
        },
        _ => Err(syntax_error(cursor, expected)),
    }
}

/// Builds a syntax error at the current token.
///
/// The diagnostic spans the offending token; once the tokens run out it sits
/// at the end of the last one.
#[must_use]
pub fn syntax_error(cursor: &TokenCursor<'_>, expected: &str) -> Diagnostic {
    match cursor.current_token() {
        Some(token) => {
            Diagnostic::new(ErrorKind::syntax(format!("{expected}, found {}.", describe(token))),
                            token.start().clone(),
                            token.end().clone())
        },
        None => {
            let position = cursor.last_position();
            Diagnostic::new(ErrorKind::syntax(format!("{expected}, found end of input.")),
                            position.clone(),
                            position)
        },
    }
}

/// Describes a token the way error messages refer to it.
fn describe(token: &Token) -> String {
    match token.kind() {
        TokenKind::Identifier => format!("identifier '{}'", token.lexeme()),
        TokenKind::Keyword => format!("keyword '{}'", token.lexeme()),
        kind @ (TokenKind::Int | TokenKind::Float | TokenKind::String) => {
            format!("{} {}", kind.symbol(), token.lexeme())
        },
        kind => kind.symbol().to_string(),
    }
}
