use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = cvpress_runtime::resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);

    let Some(command) = cli.command else {
        show_guidance(&ctx);
        return Ok(());
    };

    match command {
        Commands::Generate {
            input,
            output_dir,
            external_css,
            download,
            browser,
            timeout,
        } => handlers::generate::handle(
            &ctx,
            &input,
            &output_dir,
            external_css,
            download,
            browser,
            timeout,
        ),

        Commands::Render {
            input,
            variant,
            output,
        } => handlers::render::handle(&input, variant, output.as_deref()),

        Commands::Doctor => handlers::doctor::handle(&ctx),

        Commands::Init { refresh } => handlers::init::handle(&ctx, refresh),
    }
}

fn show_guidance(ctx: &ExecutionContext) {
    let config_exists = ctx.config_path().exists();

    println!("cvpress - Résumé document generator\n");

    if !config_exists {
        println!("Get started:");
        println!("  cvpress init\n");
        println!(
            "The init command writes a default config.toml under {}",
            ctx.data_dir().display()
        );
        println!("You can then adjust the browser and output settings.\n");
    } else {
        println!("Quick commands:");
        println!("  cvpress generate <resume.json> <dir>   # Markdown + HTML + PDF");
        println!("  cvpress render <resume.json>           # Markdown to stdout");
        println!("  cvpress doctor                         # Check browser discovery\n");
    }

    println!("For more commands:");
    println!("  cvpress --help");
}
