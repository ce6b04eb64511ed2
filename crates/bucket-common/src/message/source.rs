use std::path::Path;

use super::Error;

const UNREADABLE: &str = "EI00";
const UNDECODABLE: &str = "EI01";

impl Error {
    pub fn io_unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            code: UNREADABLE,
            message: format!("unable to open file '{}'", path.display()),
            source: Some(source),
        }
    }

    pub fn io_undecodable(path: &Path) -> Self {
        Self::Io {
            code: UNDECODABLE,
            message: format!("unable to decode unicode in '{}'", path.display()),
            source: None,
        }
    }
}
