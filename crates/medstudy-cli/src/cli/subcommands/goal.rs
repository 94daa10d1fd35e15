use clap::Subcommand;

/// Daily goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// Set the daily goal. Values below 1 and non-numbers store 1.
    Set {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show the daily goal.
    Show,
}
