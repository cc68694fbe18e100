use std::fmt;
use std::path::PathBuf;

/// Result type for cvpress-browser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving or driving a browser
#[derive(Debug)]
pub enum Error {
    /// A required argument was empty or malformed
    InvalidArgument(String),
    /// No browser lookup table exists for this operating system
    UnsupportedPlatform(&'static str),
    /// No usable browser executable could be resolved
    BrowserUnavailable(String),
    /// Fetching or unpacking the pinned Chromium snapshot failed
    DownloadFailed(String),
    /// The browser launched but produced no usable PDF
    RenderFailed { path: PathBuf, detail: String },
    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::UnsupportedPlatform(os) => {
                write!(f, "Browser discovery is not supported on {}", os)
            }
            Error::BrowserUnavailable(msg) => write!(f, "Browser unavailable: {}", msg),
            Error::DownloadFailed(msg) => write!(f, "Browser download failed: {}", msg),
            Error::RenderFailed { path, detail } => {
                write!(f, "PDF rendering failed for {}: {}", path.display(), detail)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
