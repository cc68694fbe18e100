use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::RenderVariant;

#[derive(Parser)]
#[command(name = "cvpress")]
#[command(about = "Generate Markdown, HTML, and PDF documents from a résumé JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory for config and browser cache (default: CVPRESS_PATH or ~/.cvpress)"
    )]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the full pipeline: Markdown, HTML, and PDF")]
    Generate {
        #[arg(help = "Résumé JSON file")]
        input: PathBuf,

        #[arg(help = "Directory the artifacts are written into")]
        output_dir: PathBuf,

        #[arg(long, help = "Link resume.css next to the page instead of inlining styles")]
        external_css: bool,

        #[arg(long, help = "Allow downloading a Chromium build when none is installed")]
        download: bool,

        #[arg(long, help = "Browser executable to use, skipping discovery")]
        browser: Option<PathBuf>,

        #[arg(long, help = "Maximum seconds to wait for the PDF render")]
        timeout: Option<u64>,
    },

    #[command(about = "Render the résumé as text, skipping the HTML and PDF stages")]
    Render {
        #[arg(help = "Résumé JSON file")]
        input: PathBuf,

        #[arg(long, default_value = "markdown")]
        variant: RenderVariant,

        #[arg(long, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Check the environment: data dir, config, browser discovery")]
    Doctor,

    #[command(about = "Write the default configuration")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        refresh: bool,
    },
}
