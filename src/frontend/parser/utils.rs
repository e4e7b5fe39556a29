use crate::{
    ast::Node,
    frontend::{
        lexer::token::TokenKind,
        parser::{
            core::{ParseResult, parse_expression, speculate},
            cursor::TokenCursor,
        },
    },
};

/// Parses a possibly empty, comma-separated run of expressions.
///
/// The first element is tried speculatively: if nothing that starts an
/// expression follows, the run is empty and the cursor has not moved. Once a
/// comma has been consumed another element is mandatory. The closing token is
/// left for the caller.
///
/// Grammar (simplified): `items := (expression ("," expression)*)?`
///
/// # Errors
/// Returns the diagnostic of an element that fails after consuming input, or
/// of a missing element after a comma.
pub(in crate::frontend::parser) fn parse_comma_separated(cursor: &mut TokenCursor<'_>)
                                                         -> ParseResult<Vec<Node>> {
    let mut items = Vec::new();
    let Some(first) = speculate(cursor, parse_expression)? else {
        return Ok(items);
    };
    items.push(first);

    while cursor.check(TokenKind::Comma) {
        cursor.advance();
        items.push(parse_expression(cursor)?);
    }
    Ok(items)
}

/// Skips any number of statement separators.
///
/// # Returns
/// How many separators were skipped.
pub(in crate::frontend::parser) fn skip_newlines(cursor: &mut TokenCursor<'_>) -> usize {
    let mut skipped = 0;
    while cursor.check(TokenKind::Newline) {
        cursor.advance();
        skipped += 1;
    }
    skipped
}
