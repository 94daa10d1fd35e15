use clap::Subcommand;

/// Study session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudyCommands {
    /// Log a question practice session.
    Add {
        /// Discipline name as shown by `discipline list`.
        #[arg(long)]
        discipline: String,
        /// A topic from the discipline's list.
        #[arg(long, required_unless_present = "other_topic", conflicts_with = "other_topic")]
        topic: Option<String>,
        /// A topic typed in by hand. Blank text is stored as "Other".
        #[arg(long)]
        other_topic: Option<String>,
        /// Number of questions answered.
        #[arg(long)]
        total: Option<String>,
        /// Number answered correctly.
        #[arg(long)]
        correct: Option<String>,
        /// Session date (defaults to today, YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
        /// Time spent, in minutes.
        #[arg(long)]
        minutes: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List logged sessions, newest first.
    List {
        /// Only sessions for this discipline (exact name).
        #[arg(long)]
        discipline: Option<String>,
    },
}
