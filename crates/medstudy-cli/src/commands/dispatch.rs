use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Study { action } => commands::study::handle(&action, ctx, flags),
        Commands::Discipline { action } => commands::discipline::handle(&action, ctx, flags),
        Commands::Goal { action } => commands::goal::handle(&action, ctx, flags),
        Commands::Data { action } => commands::data::handle(&action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
