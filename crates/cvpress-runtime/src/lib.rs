//! Shared runtime for the cvpress tooling.
//!
//! Owns the pieces every frontend needs: the data directory ladder, the
//! TOML configuration, the embedded page template, and the generation
//! pipeline that turns a résumé JSON file into Markdown, HTML, and PDF.

pub mod assets;
pub mod config;
pub mod error;
pub mod paths;
pub mod pipeline;

pub use assets::{STYLESHEET, STYLESHEET_FILE, StyleMode, style_element, wrap_html};
pub use config::{BrowserConfig, Config, OutputConfig};
pub use error::{Error, Result};
pub use paths::{ENV_DATA_DIR, expand_tilde, resolve_data_dir};
pub use pipeline::{GenerateOptions, GeneratedArtifacts, generate_resume};
