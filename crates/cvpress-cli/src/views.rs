use std::path::Path;

use cvpress_browser::{DiscoveredBrowser, Error as BrowserError};
use cvpress_runtime::{Config, GeneratedArtifacts};
use owo_colors::OwoColorize;

pub fn print_generated(artifacts: &GeneratedArtifacts) {
    println!("{}", "✓ Generated".green().bold());
    println!("  Markdown: {}", artifacts.markdown.display());
    println!("  HTML:     {}", artifacts.html.display());
    println!("  PDF:      {}", artifacts.pdf.display());
}

pub fn print_saved(path: &Path) {
    println!("{} {}", "✓ Wrote".green().bold(), path.display());
}

pub fn print_doctor_header() {
    println!("{}", "cvpress doctor".cyan().bold());
    println!();
}

pub fn print_platform(os: &str) {
    println!("Platform: {}", os);
}

pub fn print_data_dir(data_dir: &Path) {
    if data_dir.is_dir() {
        println!("Data dir: {}", data_dir.display());
    } else {
        println!("Data dir: {} (not created yet)", data_dir.display());
    }
}

pub fn print_config_state(config_path: &Path) {
    if config_path.is_file() {
        println!("Config:   {}", config_path.display());
    } else {
        println!(
            "Config:   {} (missing, defaults apply)",
            config_path.display()
        );
    }
}

pub fn print_settings(config: &Config) {
    if let Some(path) = &config.browser.path {
        println!("  browser.path = {}", path.display());
    }
    println!("  browser.download = {}", config.browser.download);
    println!("  browser.timeout_secs = {}", config.browser.timeout_secs);
    println!("  output.external_css = {}", config.output.external_css);
}

pub fn print_config_error(err: &anyhow::Error) {
    println!("Config:   {} {}", "✗".red().bold(), err);
}

pub fn print_browser_outcome(outcome: &Result<Option<DiscoveredBrowser>, BrowserError>) {
    println!();
    match outcome {
        Ok(Some(found)) => {
            println!(
                "Browser:  {} {} ({})",
                "✓".green().bold(),
                found.path.display(),
                found.source
            );
        }
        Ok(None) => {
            println!("Browser:  {} not found", "✗".red().bold());
            println!("  Install Chromium, set CVPRESS_BROWSER, or enable [browser] download.");
        }
        Err(err) => {
            println!("Browser:  {} {}", "✗".red().bold(), err);
        }
    }
}

pub fn print_download_cache(cached: Option<&Path>) {
    match cached {
        Some(path) => println!("Cache:    {} {}", "✓".green().bold(), path.display()),
        None => println!("Cache:    empty (no downloaded browser)"),
    }
}

pub fn print_config_written(path: &Path) {
    println!("{} {}", "✓ Wrote".green().bold(), path.display());
    println!();
    println!("Next steps:");
    println!("  Adjust the [browser] and [output] settings as needed.");
    println!("  Then run: cvpress generate <resume.json> <output-dir>");
}

pub fn print_config_kept(path: &Path) {
    println!("Config already exists: {}", path.display());
    println!("Use `cvpress init --refresh` to overwrite it with defaults.");
}
