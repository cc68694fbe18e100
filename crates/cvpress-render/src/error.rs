use std::fmt;

/// Result type for cvpress-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the rendering layer
#[derive(Debug)]
pub enum Error {
    /// Markdown input to the HTML converter was empty
    EmptyMarkdown,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyMarkdown => write!(f, "Markdown text cannot be empty"),
        }
    }
}

impl std::error::Error for Error {}
