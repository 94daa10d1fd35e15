use medstudy_core::responses::GoalResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GoalCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `medstudy goal`.
pub fn handle(
    action: &GoalCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let daily_goal = match action {
        GoalCommands::Set { value } => ctx.store.update_daily_goal(value)?,
        GoalCommands::Show => ctx.store.settings().daily_goal,
    };
    output(&GoalResponse { daily_goal }, flags.format)
}
