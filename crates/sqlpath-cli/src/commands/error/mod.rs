mod detect;

use anyhow::Context;
use serde::Serialize;
use sqlpath_mapping::{ConceptMappingSystem, TeachingStrategy, teaching_strategy_info};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ErrorCommands;
use crate::commands::shared::limit::{catalog_limit, truncated};
use crate::context::AppContext;
use crate::output::output;

/// Concept ids attached to an error subtype.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorConcepts<'a> {
    error_subtype: &'a str,
    concept_ids: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorStrategy<'a> {
    error_subtype: &'a str,
    teaching_strategy: Option<&'a str>,
    /// `None` when the key is not in the strategy table.
    details: Option<&'static TeachingStrategy>,
}

/// Handle `sqlpath error`.
pub fn handle(action: &ErrorCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let system = &ctx.system;
    match action {
        ErrorCommands::Get { key } => {
            let info = system
                .get_error_info(key)
                .with_context(|| format!("unknown error subtype '{key}'"))?;
            output(info, flags.format)
        }
        ErrorCommands::List => output(&listed_subtypes(system, flags.limit), flags.format),
        ErrorCommands::Detect { message, sql } => {
            detect::run(message, sql.as_deref().unwrap_or_default(), ctx, flags)
        }
        ErrorCommands::Concepts { key } => output(
            &ErrorConcepts {
                error_subtype: key,
                concept_ids: system.get_concepts_for_error(key),
            },
            flags.format,
        ),
        ErrorCommands::Order { key } => output(
            &ErrorConcepts {
                error_subtype: key,
                concept_ids: system.get_remediation_order(key),
            },
            flags.format,
        ),
        ErrorCommands::Strategy { key } => {
            let teaching_strategy = system.get_teaching_strategy(key);
            output(
                &ErrorStrategy {
                    error_subtype: key,
                    teaching_strategy,
                    details: teaching_strategy.and_then(teaching_strategy_info),
                },
                flags.format,
            )
        }
    }
}

/// Every catalogued key; `--limit` is the only cap.
fn listed_subtypes(system: &ConceptMappingSystem, limit: Option<u32>) -> Vec<&str> {
    truncated(system.list_error_subtypes(), catalog_limit(limit))
}
