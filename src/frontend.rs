/// Lexical analysis.
///
/// Turns source text into position-stamped tokens.
pub mod lexer;

/// Syntax analysis.
///
/// Turns tokens into an abstract syntax tree by recursive descent.
pub mod parser;
