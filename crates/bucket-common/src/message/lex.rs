use super::Error;
use crate::source::Position;

const UNEXPECTED_CHARACTER: &str = "EL00";
const LONE_BANG: &str = "EL01";
const UNCLOSED_STRING: &str = "EL02";
const INVALID_ESCAPE: &str = "EL03";
const EMPTY_CHARACTER: &str = "EL04";
const LONG_CHARACTER: &str = "EL05";
const UNCLOSED_CHARACTER: &str = "EL06";
const UNCLOSED_COMMENT: &str = "EL07";
const MISSING_EXPONENT: &str = "EL08";
const LETTER_IN_NUMBER: &str = "EL09";
const INTEGER_TOO_LARGE: &str = "EL10";
const REAL_TOO_LARGE: &str = "EL11";

impl Error {
    fn lexical(code: &'static str, at: Position, message: impl Into<String>) -> Self {
        Self::Lexical {
            code,
            message: message.into(),
            at,
        }
    }

    pub fn lex_unexpected_character(at: Position, character: char) -> Self {
        Self::lexical(
            UNEXPECTED_CHARACTER,
            at,
            format!("unexpected character {character:?}"),
        )
    }

    pub fn lex_lone_bang(at: Position) -> Self {
        Self::lexical(LONE_BANG, at, "expected '=' after '!'")
    }

    pub fn lex_unclosed_string(at: Position) -> Self {
        Self::lexical(
            UNCLOSED_STRING,
            at,
            format!(
                "string literal starting on line {}, column {} not closed",
                at.line, at.column
            ),
        )
    }

    pub fn lex_invalid_escape(at: Position) -> Self {
        Self::lexical(INVALID_ESCAPE, at, "invalid escape sequence")
    }

    pub fn lex_empty_character(at: Position) -> Self {
        Self::lexical(EMPTY_CHARACTER, at, "empty character literal")
    }

    pub fn lex_long_character(at: Position) -> Self {
        Self::lexical(
            LONG_CHARACTER,
            at,
            "character literal has multiple characters",
        )
    }

    pub fn lex_unclosed_character(at: Position) -> Self {
        Self::lexical(UNCLOSED_CHARACTER, at, "character literal not closed")
    }

    pub fn lex_unclosed_comment(at: Position) -> Self {
        Self::lexical(
            UNCLOSED_COMMENT,
            at,
            format!(
                "block comment starting on line {}, column {} not closed",
                at.line, at.column
            ),
        )
    }

    pub fn lex_missing_exponent(at: Position) -> Self {
        Self::lexical(
            MISSING_EXPONENT,
            at,
            "expected number in real literal exponent",
        )
    }

    pub fn lex_letter_in_number(at: Position) -> Self {
        Self::lexical(LETTER_IN_NUMBER, at, "letter in number literal")
    }

    pub fn lex_integer_too_large(at: Position) -> Self {
        Self::lexical(INTEGER_TOO_LARGE, at, "integer literal too large")
    }

    pub fn lex_real_too_large(at: Position) -> Self {
        Self::lexical(REAL_TOO_LARGE, at, "real literal too large")
    }
}
