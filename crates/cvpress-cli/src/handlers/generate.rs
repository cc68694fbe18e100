use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use cvpress_runtime::{GenerateOptions, generate_resume};

use crate::context::ExecutionContext;
use crate::views;

pub fn handle(
    ctx: &ExecutionContext,
    input: &Path,
    output_dir: &Path,
    external_css: bool,
    download: bool,
    browser: Option<PathBuf>,
    timeout: Option<u64>,
) -> Result<()> {
    let config = ctx.config()?;
    let mut options = GenerateOptions::from_config(config, ctx.data_dir());

    // Flags override the config file for this run only.
    if external_css {
        options.external_css = true;
    }
    if download {
        options.download = true;
    }
    if let Some(path) = browser {
        options.browser_path = Some(path);
    }
    if let Some(secs) = timeout {
        options.timeout = Duration::from_secs(secs);
    }

    let artifacts = generate_resume(input, output_dir, &options)?;
    views::print_generated(&artifacts);

    Ok(())
}
