use anyhow::Result;

use crate::context::ExecutionContext;
use crate::views;

/// Reports the environment the pipeline would run in. Every probe failure
/// is printed rather than returned, so the report always completes.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    views::print_doctor_header();

    views::print_platform(std::env::consts::OS);
    views::print_data_dir(ctx.data_dir());
    views::print_config_state(&ctx.config_path());

    let explicit = match ctx.config() {
        Ok(config) => {
            views::print_settings(config);
            config.browser.path.clone()
        }
        Err(err) => {
            views::print_config_error(&err);
            None
        }
    };

    let outcome = cvpress_browser::probe(explicit.as_deref());
    views::print_browser_outcome(&outcome);

    let cached = cvpress_browser::downloaded_executable(ctx.data_dir());
    views::print_download_cache(cached.as_deref());

    Ok(())
}
