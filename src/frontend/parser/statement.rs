use crate::{
    ast::Node,
    frontend::{
        lexer::token::TokenKind,
        parser::{
            core::{ParseResult, expect, parse_expression, speculate, syntax_error},
            cursor::TokenCursor,
            utils::skip_newlines,
        },
    },
};

/// Parses a whole program into its statements.
///
/// Statements are separated by one or more `NEWLINE` tokens (line breaks or
/// `;`). Leading and trailing separators are ignored, so blank lines and a
/// file made only of comments are fine.
///
/// Grammar: `program := NEWLINE* (statement (NEWLINE+ statement)*)? NEWLINE*
/// EOF`
///
/// # Errors
/// Fails on the first statement that does not parse, or when a statement is
/// followed by anything other than a separator or the end of input.
pub fn parse_program(cursor: &mut TokenCursor<'_>) -> ParseResult<Vec<Node>> {
    let mut statements = Vec::new();
    skip_newlines(cursor);

    while !cursor.check(TokenKind::Eof) {
        statements.push(parse_statement(cursor)?);

        if cursor.check(TokenKind::Eof) {
            break;
        }
        if skip_newlines(cursor) == 0 {
            // A comment takes its line break with it, so the next line runs on.
            let expected = if cursor.follows_comment() {
                "Expected ';' before a trailing comment"
            } else {
                "Expected an operator, newline or end of input"
            };
            return Err(syntax_error(cursor, expected));
        }
    }

    Ok(statements)
}

/// Parses a single statement: an assignment if the input looks like one,
/// otherwise an expression.
///
/// Grammar: `statement := assignment | expression`
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    if let Some(assignment) = speculate(cursor, parse_assignment)? {
        return Ok(assignment);
    }
    parse_expression(cursor)
}

/// Parses a variable assignment such as `VAR x = 1` or `x = x + 1`.
///
/// The `VAR` keyword is optional. Without it, an identifier followed by `=`
/// is required before anything is consumed, so `x + 1` is rejected here with
/// the cursor untouched. With `VAR`, the statement is committed to being an
/// assignment and any later error is final.
///
/// Grammar: `assignment := "VAR"? IDENTIFIER "=" expression`
///
/// # Errors
/// Returns a syntax error if the input is not an assignment.
pub fn parse_assignment(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    if cursor.check_keyword("VAR") {
        cursor.advance();
    } else if !(cursor.check(TokenKind::Identifier)
                && cursor.peek(1).is_some_and(|token| token.is(TokenKind::Equals)))
    {
        return Err(syntax_error(cursor, "Expected an assignment"));
    }

    let name = expect(cursor, TokenKind::Identifier, "Expected identifier")?;
    expect(cursor, TokenKind::Equals, "Expected '='")?;
    let value = parse_expression(cursor)?;

    Ok(Node::VarAssign { name:  name.clone(),
                         value: Box::new(value), })
}
