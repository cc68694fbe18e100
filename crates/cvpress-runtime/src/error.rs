use std::fmt;
use std::path::PathBuf;

/// Result type for cvpress-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// A required argument was empty or malformed
    InvalidArgument(String),

    /// An input path does not exist
    NotFound(PathBuf),

    /// Résumé model layer error
    Model(cvpress_types::Error),

    /// Rendering layer error
    Render(cvpress_render::Error),

    /// Browser layer error
    Browser(cvpress_browser::Error),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::NotFound(path) => write!(f, "Not found: {}", path.display()),
            Error::Model(err) => write!(f, "Resume error: {}", err),
            Error::Render(err) => write!(f, "Render error: {}", err),
            Error::Browser(err) => write!(f, "Browser error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Model(err) => Some(err),
            Error::Render(err) => Some(err),
            Error::Browser(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidArgument(_) | Error::NotFound(_) | Error::Config(_) => None,
        }
    }
}

impl From<cvpress_types::Error> for Error {
    fn from(err: cvpress_types::Error) -> Self {
        Error::Model(err)
    }
}

impl From<cvpress_render::Error> for Error {
    fn from(err: cvpress_render::Error) -> Self {
        Error::Render(err)
    }
}

impl From<cvpress_browser::Error> for Error {
    fn from(err: cvpress_browser::Error) -> Self {
        Error::Browser(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
