use std::{fmt, sync::Arc};

/// The default filename used when source text does not come from a file.
pub const DEFAULT_FILENAME: &str = "<STDIN>";

/// A cursor into a source text.
///
/// Every token and AST node carries a start and end `Position`. Positions are
/// value objects: the lexer owns one mutable cursor and hands out clones of it,
/// so a position stamped on a token never changes when the cursor moves on.
///
/// The filename and the full source text are shared (`Arc<str>`), which keeps
/// cloning cheap and lets a diagnostic render the offending line later.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Zero-based byte offset into `file_text`.
    pub index:     usize,
    /// Zero-based line number.
    pub line:      usize,
    /// Zero-based column, counted in characters.
    pub column:    usize,
    /// Name of the file (or `<STDIN>`) the text was read from.
    pub filename:  Arc<str>,
    /// The complete source text.
    pub file_text: Arc<str>,
}

impl Position {
    /// Creates a position at the very start of `file_text`.
    ///
    /// # Example
    /// ```
    /// use shork::position::Position;
    ///
    /// let pos = Position::new("main.shk", "VAR x = 1");
    /// assert_eq!((pos.index, pos.line, pos.column), (0, 0, 0));
    /// assert_eq!(&*pos.filename, "main.shk");
    /// ```
    #[must_use]
    pub fn new(filename: &str, file_text: &str) -> Self {
        Self { index:     0,
               line:      0,
               column:    0,
               filename:  Arc::from(filename),
               file_text: Arc::from(file_text), }
    }

    /// Moves the cursor past `current`.
    ///
    /// The index and column always move forward; a newline additionally
    /// resets the column and starts a new line. `None` (the end of input)
    /// counts as a single unit.
    ///
    /// # Example
    /// ```
    /// use shork::position::Position;
    ///
    /// let mut pos = Position::new("<STDIN>", "a\nb");
    /// pos.advance(Some('a'));
    /// assert_eq!((pos.index, pos.line, pos.column), (1, 0, 1));
    /// pos.advance(Some('\n'));
    /// assert_eq!((pos.index, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub fn advance(&mut self, current: Option<char>) {
        self.index += current.map_or(1, char::len_utf8);
        self.column += 1;

        if current == Some('\n') {
            self.column = 0;
            self.line += 1;
        }
    }

    /// Returns the full source line this position sits on, without its
    /// terminating newline.
    #[must_use]
    pub fn line_text(&self) -> &str {
        let index = self.index.min(self.file_text.len());
        let line_start = self.file_text[..index].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.file_text[index..].find('\n')
                                              .map_or(self.file_text.len(), |i| index + i);
        &self.file_text[line_start..line_end]
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{}:{}@{}",
               self.filename,
               self.line + 1,
               self.column + 1,
               self.index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, line {}", self.filename, self.line + 1)
    }
}
