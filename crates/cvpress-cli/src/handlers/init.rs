use anyhow::Result;
use cvpress_runtime::Config;

use crate::context::ExecutionContext;
use crate::views;

pub fn handle(ctx: &ExecutionContext, refresh: bool) -> Result<()> {
    let config_path = ctx.config_path();

    if config_path.exists() && !refresh {
        views::print_config_kept(&config_path);
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    views::print_config_written(&config_path);

    Ok(())
}
