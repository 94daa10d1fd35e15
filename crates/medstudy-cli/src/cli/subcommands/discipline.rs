use clap::Subcommand;

/// Discipline management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DisciplineCommands {
    /// Add a custom discipline.
    Add {
        name: String,
        /// Comma-separated topic list.
        #[arg(long)]
        topics: Option<String>,
    },
    /// Delete a custom discipline by ID.
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// List built-in and custom disciplines.
    List {
        /// Only custom disciplines.
        #[arg(long)]
        custom: bool,
    },
    /// List the topics offered for a discipline.
    Topics { name: String },
}
