use medstudy_core::entities::StudyRecord;
use medstudy_core::enums::TopicChoice;
use medstudy_core::responses::StudyCreateResponse;
use medstudy_store::NewStudyRecordBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudyCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StudyListResponse<'a> {
    studies: Vec<&'a StudyRecord>,
}

/// Handle `medstudy study`.
pub fn handle(
    action: &StudyCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudyCommands::Add {
            discipline,
            topic,
            other_topic,
            total,
            correct,
            date,
            minutes,
            notes,
        } => {
            let topic = topic_choice(topic.as_deref(), other_topic.as_deref());
            let date = date.clone().unwrap_or_else(today);
            let input = NewStudyRecordBuilder::new(discipline.as_str(), topic)
                .total_questions(total.clone().unwrap_or_default())
                .correct_answers(correct.clone().unwrap_or_default())
                .date(date)
                .duration_minutes(minutes.clone().unwrap_or_default())
                .notes(notes.clone().unwrap_or_default())
                .build();

            if ctx.store.find_discipline(discipline).is_none() {
                tracing::warn!(%discipline, "logging a session for an unknown discipline");
            }

            let study = ctx.store.add_study_record(input)?;
            output(&StudyCreateResponse { study }, flags.format)
        }
        StudyCommands::List { discipline } => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let studies = newest_first(
                ctx.store
                    .studies_for_discipline(discipline.as_deref().unwrap_or_default()),
                limit,
            );
            output(&StudyListResponse { studies }, flags.format)
        }
    }
}

fn topic_choice(listed: Option<&str>, other: Option<&str>) -> TopicChoice {
    match listed {
        Some(topic) => TopicChoice::Listed(topic.to_string()),
        None => TopicChoice::Other(other.unwrap_or_default().to_string()),
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn newest_first(mut studies: Vec<&StudyRecord>, limit: usize) -> Vec<&StudyRecord> {
    studies.reverse();
    studies.truncate(limit);
    studies
}
