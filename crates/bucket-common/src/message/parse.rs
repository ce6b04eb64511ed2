use super::Error;
use crate::source::Position;

const EXPECTED: &str = "EP00";

impl Error {
    /// Some construct was required at `at`, but the token `found` was there
    /// instead.
    pub fn parse_expected(at: Position, expected: impl AsRef<str>, found: impl AsRef<str>) -> Self {
        Self::Syntax {
            code: EXPECTED,
            message: format!("expected {}, found {}", expected.as_ref(), found.as_ref()),
            at,
        }
    }
}
