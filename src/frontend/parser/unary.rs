use crate::{
    ast::Node,
    frontend::{
        lexer::token::TokenKind,
        parser::{
            core::{ParseResult, expect, parse_expression, parse_nested, syntax_error},
            cursor::TokenCursor,
            utils::parse_comma_separated,
        },
    },
};

const EXPECTED_ATOM: &str =
    "Expected int, float, string, identifier, '(', '[', '-' or 'NOT'";

/// Parses prefix operators.
///
/// Handles arithmetic negation `-x` and logical negation `NOT x`. Both bind
/// tighter than every binary operator and may be stacked (`- -x`).
///
/// Grammar: `unary := ("-" | "NOT") unary | atom`
pub fn parse_unary(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    if let Some(op) = cursor.current_token()
       && (op.is(TokenKind::Minus) || op.is_keyword("NOT"))
    {
        cursor.advance();
        let operand = parse_nested(cursor, parse_unary)?;
        return Ok(Node::UnaryOp { op:      op.clone(),
                                  operand: Box::new(operand), });
    }
    parse_atom(cursor)
}

/// Parses an atom: a literal, a variable, a parenthesized expression or a
/// list.
///
/// Grammar:
/// `atom := INT | FLOAT | STRING | IDENTIFIER | "(" expression ")" | list`
///
/// # Errors
/// Fails without consuming anything if the current token cannot start an
/// atom, which lets callers probe for an expression with
/// [`speculate`](super::core::speculate).
pub fn parse_atom(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let Some(token) = cursor.current_token() else {
        return Err(syntax_error(cursor, EXPECTED_ATOM));
    };

    match token.kind() {
        TokenKind::Int | TokenKind::Float => {
            cursor.advance();
            Ok(Node::Number { token: token.clone() })
        },
        TokenKind::String => {
            cursor.advance();
            Ok(Node::String { token: token.clone() })
        },
        TokenKind::Identifier => {
            cursor.advance();
            Ok(Node::VarAccess { name: token.clone() })
        },
        TokenKind::LParen => parse_grouping(cursor),
        TokenKind::LBrack => parse_list_literal(cursor),
        _ => Err(syntax_error(cursor, EXPECTED_ATOM)),
    }
}

/// Parses a parenthesized expression. The parentheses leave no trace in the
/// tree.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    expect(cursor, TokenKind::LParen, "Expected '('")?;
    let inner = parse_nested(cursor, parse_expression)?;
    expect(cursor, TokenKind::RParen, "Expected ')'")?;
    Ok(inner)
}

/// Parses a list literal such as `[1, 2, 3]` or `[]`.
///
/// The resulting [`Node::List`] spans from the opening to the closing bracket.
///
/// Grammar: `list := "[" (expression ("," expression)*)? "]"`
pub fn parse_list_literal(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let open = expect(cursor, TokenKind::LBrack, "Expected '['")?;
    let elements = parse_nested(cursor, parse_comma_separated)?;
    let close = expect(cursor, TokenKind::RBrack, "Expected ',' or ']'")?;

    Ok(Node::List { elements,
                    start: open.start().clone(),
                    end: close.end().clone() })
}
