//! The character source feeding the lexer. A [`SourceFile`] owns the decoded
//! text of a file and a cursor into it, and hands out one character at a time
//! together with the 1-based [`Position`] of that character.

mod span;


pub use span::{Position, Span};

use std::fs;
use std::path::Path;

use codespan_reporting::files::{Files, SimpleFile};
use log::debug;

use crate::message::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug)]
pub struct SourceFile {
    file: SimpleFile<String, String>,
    cursor: usize,
    position: Position,
}

impl SourceFile {
    /// Read and decode the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| Error::io_unreadable(path, err))?;
        let text = String::from_utf8(bytes).map_err(|_| Error::io_undecodable(path))?;

        debug!("read {} bytes from '{}'", text.len(), path.display());

        Ok(Self::new(path.display().to_string(), text))
    }

    /// Create a source from text already in memory. A leading byte order mark
    /// is dropped.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.starts_with(BYTE_ORDER_MARK) {
            text.drain(..BYTE_ORDER_MARK.len_utf8());
        }

        Self {
            file: SimpleFile::new(name.into(), text),
            cursor: 0,
            position: Position::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn text(&self) -> &str {
        self.file.source()
    }

    /// The character under the cursor, or `None` at the end of the file.
    pub fn current(&self) -> Option<char> {
        self.text()[self.cursor..].chars().next()
    }

    /// Move the cursor one character forward. Does nothing at the end of the
    /// file.
    pub fn next(&mut self) {
        let Some(c) = self.current() else {
            return;
        };

        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        self.cursor += c.len_utf8();
    }

    /// The position of the character under the cursor.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The position of the character starting at the given byte offset.
    /// Offsets past the end are clamped to the end of the file.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text().len());
        match self.file.location((), offset) {
            Ok(location) => Position::new(location.line_number, location.column_number),
            Err(_) => self.end_position(),
        }
    }

    /// The position just past the last character.
    pub fn end_position(&self) -> Position {
        let mut position = Position::default();
        for c in self.text().chars() {
            if c == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }

        position
    }

    /// The span between two byte offsets.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.position_at(start), self.position_at(end))
    }
}
