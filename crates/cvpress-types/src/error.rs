use std::fmt;

/// Result type for cvpress-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the model layer
#[derive(Debug)]
pub enum Error {
    /// Input document was empty or whitespace-only
    EmptyInput,
    /// Input document was not a valid résumé record
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Resume text cannot be empty"),
            Error::Json(err) => write!(f, "Resume JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::EmptyInput => None,
            Error::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
