use crate::{
    ast::Node,
    frontend::{
        lexer::token::{Token, TokenKind},
        parser::{core::ParseResult, cursor::TokenCursor, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("OR" logical_and)*`
pub fn parse_logical_or(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_left_associative(cursor, parse_logical_and, |token| token.is_keyword("OR"))
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := comparison ("AND" comparison)*`
pub fn parse_logical_and(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_left_associative(cursor, parse_comparison, |token| token.is_keyword("AND"))
}

/// Parses comparison expressions.
///
/// Comparisons chain left to right like any other binary level, so
/// `a < b < c` groups as `(a < b) < c`.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// additive)*`
pub fn parse_comparison(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_left_associative(cursor, parse_additive, |token| {
        matches!(token.kind(),
                 TokenKind::DoubleEquals
                 | TokenKind::NotEqual
                 | TokenKind::LessThan
                 | TokenKind::LessThanOrEqual
                 | TokenKind::GreaterThan
                 | TokenKind::GreaterThanOrEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_left_associative(cursor, parse_multiplicative, |token| {
        matches!(token.kind(), TokenKind::Plus | TokenKind::Minus)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_left_associative(cursor, parse_power, |token| {
        matches!(token.kind(), TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent)
    })
}

/// Parses exponentiation.
///
/// `^` is right-associative: `2 ^ 3 ^ 2` is parsed as `2 ^ (3 ^ 2)`. Its
/// operands are unary expressions, so `-2 ^ 2` is `(-2) ^ 2` and `2 ^ -1` is
/// accepted.
///
/// Grammar: `power := unary ("^" power)?`
pub fn parse_power(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let base = parse_unary(cursor)?;
    if let Some(op) = cursor.current_token()
       && op.is(TokenKind::Caret)
    {
        cursor.advance();
        let exponent = parse_power(cursor)?;
        return Ok(Node::BinOp { left:  Box::new(base),
                                op:    op.clone(),
                                right: Box::new(exponent), });
    }
    Ok(base)
}

/// Folds `operand (op operand)*` into a left-leaning chain of
/// [`Node::BinOp`]s.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first operand.
/// - `operand`: Rule for the next-higher precedence level.
/// - `is_operator`: Accepts the operator tokens of this level.
fn parse_left_associative<'t>(cursor: &mut TokenCursor<'t>,
                              operand: impl Fn(&mut TokenCursor<'t>) -> ParseResult<Node>,
                              is_operator: impl Fn(&Token) -> bool)
                              -> ParseResult<Node> {
    let mut left = operand(cursor)?;
    while let Some(op) = cursor.current_token()
          && is_operator(op)
    {
        cursor.advance();
        let right = operand(cursor)?;
        left = Node::BinOp { left: Box::new(left),
                             op: op.clone(),
                             right: Box::new(right) };
    }
    Ok(left)
}
