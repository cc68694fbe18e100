//! Testing infrastructure for cvpress integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `fixtures`: Sample résumé documents and placement helpers
//! - `browser`: Fake browser executables for exercising the PDF
//!   lifecycle without a real Chromium install

pub mod browser;
pub mod fixtures;

pub use fixtures::{MINIMAL_RESUME_JSON, SAMPLE_RESUME_JSON};
