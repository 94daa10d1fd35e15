use std::path::Path;

use anyhow::Context;
use medstudy_core::responses::DataSummaryResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DataCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `medstudy data`.
pub fn handle(
    action: &DataCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DataCommands::Export { output: None } => {
            println!("{}", ctx.store.export_json()?);
            Ok(())
        }
        DataCommands::Export { output: Some(path) } => {
            let document = ctx.store.export_json()?;
            std::fs::write(path, document)
                .with_context(|| format!("failed to write export to {path}"))?;
            if !flags.quiet {
                output(&DataSummaryResponse::from(ctx.store.state()), flags.format)?;
            }
            Ok(())
        }
        DataCommands::Import { path } => {
            let raw = read_import(Path::new(path))?;
            ctx.store
                .import_json(&raw)
                .with_context(|| format!("failed to import {path}"))?;
            output(&DataSummaryResponse::from(ctx.store.state()), flags.format)
        }
        DataCommands::Clear => {
            ctx.store.clear()?;
            output(&DataSummaryResponse::from(ctx.store.state()), flags.format)
        }
    }
}

fn read_import(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read import file {}", path.display()))
}
