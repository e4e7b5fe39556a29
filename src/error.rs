/// The structured failure value returned by the lexer and parser.
///
/// A `Diagnostic` pairs an [`ErrorKind`] with the start and end position of
/// the offending source text, and knows how to render itself for a user.
pub mod diagnostic;
/// The closed set of error kinds.
///
/// Defines every failure the front end can report, from illegal characters
/// during scanning to syntax errors during parsing, together with their
/// display names and messages.
pub mod kind;

pub use diagnostic::Diagnostic;
pub use kind::ErrorKind;
