use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use cvpress_render::{render_markdown, render_plain};
use cvpress_types::Resume;

use crate::types::RenderVariant;
use crate::views;

pub fn handle(input: &Path, variant: RenderVariant, output: Option<&Path>) -> Result<()> {
    if !input.is_file() {
        bail!("Not found: {}", input.display());
    }

    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let resume = Resume::from_json(&json)?;

    let text = match variant {
        RenderVariant::Markdown => render_markdown(&resume),
        RenderVariant::Plain => render_plain(&resume),
    };

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            views::print_saved(path);
        }
        None => print!("{}", text),
    }

    Ok(())
}
