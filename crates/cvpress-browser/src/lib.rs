pub mod discovery;
pub mod error;
pub mod fetch;
pub mod pdf;

pub use discovery::{
    BrowserSource, DiscoveredBrowser, ENV_BROWSER, discover, probe, resolve, system_candidates,
};
pub use error::{Error, Result};
pub use fetch::{CACHE_DIR_NAME, CHROMIUM_REVISION, downloaded_executable, ensure_downloaded};
pub use pdf::{DEFAULT_TIMEOUT, PdfEngine};
