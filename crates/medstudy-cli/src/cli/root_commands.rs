use clap::{Args, Subcommand};

use crate::cli::subcommands::{DataCommands, DisciplineCommands, GoalCommands, StudyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Study sessions.
    Study {
        #[command(subcommand)]
        action: StudyCommands,
    },
    /// Built-in and custom disciplines.
    Discipline {
        #[command(subcommand)]
        action: DisciplineCommands,
    },
    /// Daily study goal.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Export, import, or clear all data.
    Data {
        #[command(subcommand)]
        action: DataCommands,
    },
    /// Print registered JSON Schemas.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (lists all names when omitted).
    pub name: Option<String>,
}
