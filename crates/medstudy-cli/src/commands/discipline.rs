use medstudy_core::entities::Discipline;
use medstudy_core::responses::{
    DisciplineCreateResponse, DisciplineDeleteResponse, TopicListResponse,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DisciplineCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DisciplineListResponse<'a> {
    disciplines: Vec<&'a Discipline>,
}

/// Handle `medstudy discipline`.
pub fn handle(
    action: &DisciplineCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DisciplineCommands::Add { name, topics } => {
            let discipline = ctx
                .store
                .add_custom_discipline(name, topics.as_deref().unwrap_or_default())?;
            output(&DisciplineCreateResponse { discipline }, flags.format)
        }
        DisciplineCommands::Delete { id } => {
            let removed = ctx.store.delete_custom_discipline(*id)?;
            output(
                &DisciplineDeleteResponse {
                    id: *id,
                    removed: !removed.is_empty(),
                },
                flags.format,
            )
        }
        DisciplineCommands::List { custom } => {
            let mut disciplines: Vec<&Discipline> = if *custom {
                ctx.store.custom_disciplines().iter().collect()
            } else {
                ctx.store.list_all_disciplines()
            };
            disciplines.truncate(effective_limit(
                flags.limit,
                ctx.config.general.default_limit,
            ));
            output(&DisciplineListResponse { disciplines }, flags.format)
        }
        DisciplineCommands::Topics { name } => {
            if ctx.store.find_discipline(name).is_none() {
                tracing::warn!(%name, "no discipline with this exact name");
            }
            let topics = ctx.store.list_topics_for_discipline(name);
            output(
                &TopicListResponse {
                    discipline: name.clone(),
                    topics,
                },
                flags.format,
            )
        }
    }
}
