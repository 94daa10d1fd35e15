use clap::Subcommand;

/// Whole-document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DataCommands {
    /// Write the full document as JSON.
    Export {
        /// Write to a file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Replace all data with a previously exported document.
    Import { path: String },
    /// Remove custom disciplines and sessions and reset the goal.
    Clear,
}
