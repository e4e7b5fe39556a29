use std::fmt::Write as _;

use crate::{error::ErrorKind, position::Position};

/// A single structured failure raised while lexing or parsing.
///
/// A diagnostic aborts the pass that raised it; no partial token stream or
/// tree is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind:  ErrorKind,
    /// Where the offending text starts.
    pub start: Position,
    /// Where the offending text ends (exclusive).
    pub end:   Position,
}

impl Diagnostic {
    /// Creates a diagnostic covering `start..end`.
    #[must_use]
    pub const fn new(kind: ErrorKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// The name of the error kind, e.g. `"Syntax Error"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The human-readable message, without the kind name or location.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Renders the source line the diagnostic starts on, underlined with `^`
    /// below the offending span.
    ///
    /// A span that runs past the end of its first line is underlined up to the
    /// end of that line. An empty span (for example at the end of input) still
    /// gets a single marker.
    ///
    /// # Example
    /// ```
    /// use shork::tokenize;
    ///
    /// let diagnostic = tokenize("1 + @", "<STDIN>").unwrap_err();
    /// assert_eq!(diagnostic.snippet(), "1 + @\n    ^");
    /// ```
    #[must_use]
    pub fn snippet(&self) -> String {
        let line = self.start.line_text();
        let width = if self.end.line == self.start.line {
            self.end.column.saturating_sub(self.start.column)
        } else {
            line.chars().count().saturating_sub(self.start.column)
        };

        let mut out = String::from(line);
        out.push('\n');
        out.push_str(&" ".repeat(self.start.column));
        out.push_str(&"^".repeat(width.max(1)));
        out
    }

    /// Renders the diagnostic followed by its [`snippet`](Self::snippet).
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let _ = write!(out, "\n\n{}", self.snippet());
        out
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}: {}\nFile: {}, line {}",
               self.kind.name(),
               self.kind,
               self.start.filename,
               self.start.line + 1)
    }
}

impl std::error::Error for Diagnostic {}
