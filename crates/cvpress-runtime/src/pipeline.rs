//! End-to-end generation: a résumé JSON file in, Markdown, HTML, and PDF
//! artifacts out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cvpress_browser::PdfEngine;
use cvpress_render::{render_markdown, to_html};
use cvpress_types::Resume;

use crate::assets::{self, StyleMode};
use crate::config::Config;
use crate::error::{Error, Result};

/// Knobs for one generation run, resolved from config and CLI flags
/// before the pipeline starts.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Link `resume.css` next to the page instead of inlining the styles.
    pub external_css: bool,
    /// Allow downloading a Chromium snapshot when discovery finds nothing.
    pub download: bool,
    /// Explicit browser executable, checked before any discovery.
    pub browser_path: Option<PathBuf>,
    /// Deadline for the print-to-PDF run.
    pub timeout: Duration,
    /// Directory downloaded browser builds are cached under.
    pub cache_dir: PathBuf,
}

impl GenerateOptions {
    /// Derives run options from the loaded configuration. Downloads land
    /// under the data directory.
    pub fn from_config(config: &Config, data_dir: &Path) -> Self {
        Self {
            external_css: config.output.external_css,
            download: config.browser.download,
            browser_path: config.browser.path.clone(),
            timeout: Duration::from_secs(config.browser.timeout_secs),
            cache_dir: data_dir.to_path_buf(),
        }
    }
}

/// Paths of the files a generation run produced, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub markdown: PathBuf,
    pub html: PathBuf,
    pub pdf: PathBuf,
}

/// Runs the full pipeline for one résumé file.
///
/// Stages run in order: parse, render Markdown, convert to HTML, wrap in
/// the page template, rasterize to PDF. Each artifact is written as soon
/// as its stage finishes, so a failure in a later stage leaves the
/// earlier files on disk for inspection.
pub fn generate_resume(
    input: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<GeneratedArtifacts> {
    if input.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(
            "input path cannot be empty".into(),
        ));
    }
    if output_dir.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(
            "output directory cannot be empty".into(),
        ));
    }
    if !input.is_file() {
        return Err(Error::NotFound(input.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(Error::NotFound(output_dir.to_path_buf()));
    }

    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            Error::InvalidArgument(format!("input has no usable file name: {}", input.display()))
        })?;

    let json = fs::read_to_string(input)?;
    let resume = Resume::from_json(&json)?;

    let markdown = render_markdown(&resume);
    let markdown_path = output_dir.join(format!("{stem}.md"));
    fs::write(&markdown_path, &markdown)?;

    let body = to_html(&markdown)?;
    let mode = if options.external_css {
        StyleMode::External
    } else {
        StyleMode::Inline
    };
    let page = assets::wrap_html(&resume.name, &assets::style_element(mode), &body);
    let html_path = output_dir.join(format!("{stem}.html"));
    fs::write(&html_path, &page)?;
    if options.external_css {
        fs::write(output_dir.join(assets::STYLESHEET_FILE), assets::STYLESHEET)?;
    }

    let browser = cvpress_browser::resolve(
        options.browser_path.as_deref(),
        options.download,
        &options.cache_dir,
    )?;
    let pdf_path = output_dir.join(format!("{stem}.pdf"));
    PdfEngine::new(browser.path)
        .with_timeout(options.timeout)
        .from_html(&html_path, &pdf_path)?;

    Ok(GeneratedArtifacts {
        markdown: markdown_path,
        html: html_path,
        pdf: pdf_path,
    })
}
