// NOTE: cvpress layering
//
// types   - résumé data model (serde)
// render  - Markdown/plain renderers and the Markdown->HTML converter
// browser - Chromium discovery, snapshot download, print-to-PDF
// runtime - config, data dir resolution, page template, pipeline
// cli     - argument parsing, dispatch, console views
//
// Handlers own user-facing behavior and return anyhow::Result; the
// library crates keep typed errors so callers can match on failure
// classes.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod types;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
