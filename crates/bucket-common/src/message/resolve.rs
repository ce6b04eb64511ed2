use super::Error;
use crate::source::Position;

const REDEFINITION: &str = "ES00";
const UNKNOWN_NAME: &str = "ES01";
const NOT_A_CLASS: &str = "ES02";
const UNSUPPORTED_TYPE: &str = "ES03";

impl Error {
    pub fn resolve_redefinition(at: Position, name: impl AsRef<str>) -> Self {
        Self::Semantic {
            code: REDEFINITION,
            message: format!("redefining name '{}'", name.as_ref()),
            at,
        }
    }

    pub fn resolve_unknown_name(at: Position, name: impl AsRef<str>) -> Self {
        Self::Semantic {
            code: UNKNOWN_NAME,
            message: format!("undefined identifier '{}'", name.as_ref()),
            at,
        }
    }

    pub fn resolve_not_a_class(at: Position, name: impl AsRef<str>) -> Self {
        Self::Semantic {
            code: NOT_A_CLASS,
            message: format!("'{}' does not name a class", name.as_ref()),
            at,
        }
    }

    /// Only plain names are understood as types for now.
    pub fn resolve_unsupported_type(at: Position) -> Self {
        Self::Semantic {
            code: UNSUPPORTED_TYPE,
            message: "unsupported type expression".into(),
            at,
        }
    }
}
