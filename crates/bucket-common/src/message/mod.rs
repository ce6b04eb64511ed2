//! Every stage of the pipeline stops at the first problem it finds. Problems
//! are reported as an [`Error`], which carries the kind of the problem, a
//! short code identifying the exact situation, a message, and (for anything
//! found in the source text) the position it was found at.
//!
//! The constructors for each stage live in their own module, so the codes of a
//! stage are kept together.

mod lex;
mod parse;
mod resolve;
mod source;

use thiserror::Error;

use crate::source::Position;

pub type Result<T> = std::result::Result<T, Error>;

/// A short identifier for a specific error situation, such as `EL00`.
pub type Code = &'static str;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message} ({at})")]
    Lexical {
        code: Code,
        message: String,
        at: Position,
    },

    #[error("{message} ({at})")]
    Syntax {
        code: Code,
        message: String,
        at: Position,
    },

    #[error("{message} ({at})")]
    Semantic {
        code: Code,
        message: String,
        at: Position,
    },

    #[error("{message}")]
    Io {
        code: Code,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Semantic { .. } => ErrorKind::Semantic,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    pub fn code(&self) -> Code {
        match self {
            Self::Lexical { code, .. }
            | Self::Syntax { code, .. }
            | Self::Semantic { code, .. }
            | Self::Io { code, .. } => code,
        }
    }

    /// The message without the position.
    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. }
            | Self::Syntax { message, .. }
            | Self::Semantic { message, .. }
            | Self::Io { message, .. } => message,
        }
    }

    /// Where in the source the error was found, if it was found in the source
    /// at all.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Lexical { at, .. } | Self::Syntax { at, .. } | Self::Semantic { at, .. } => {
                Some(*at)
            }
            Self::Io { .. } => None,
        }
    }
}
