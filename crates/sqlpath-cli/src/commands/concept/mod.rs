use anyhow::Context;
use sqlpath_core::enums::Difficulty;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConceptCommands;
use crate::commands::shared::limit::{catalog_limit, effective_limit, truncated};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sqlpath concept`.
pub fn handle(
    action: &ConceptCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let system = &ctx.system;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    match action {
        ConceptCommands::Get { id } => {
            let concept = system
                .get_concept_content(id)
                .with_context(|| format!("unknown concept '{id}'"))?;
            output(concept, flags.format)
        }
        ConceptCommands::List => output(
            &truncated(system.list_concepts(), catalog_limit(flags.limit)),
            flags.format,
        ),
        ConceptCommands::Difficulty { level } => {
            let level: Difficulty = parse_enum(level)?;
            output(
                &truncated(system.get_concepts_by_difficulty(level), limit),
                flags.format,
            )
        }
        ConceptCommands::Category { name } => output(
            &truncated(system.get_concepts_by_category(name), limit),
            flags.format,
        ),
        ConceptCommands::Search { query } => output(
            &truncated(system.search_concepts(query), limit),
            flags.format,
        ),
    }
}
