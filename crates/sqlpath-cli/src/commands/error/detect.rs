use serde::Serialize;
use sqlpath_core::entities::ErrorSubtype;
use sqlpath_core::responses::LearningPath;
use sqlpath_mapping::ConceptMappingSystem;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Classification of a raw error message, with the path when one exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Detection<'a> {
    error_subtype: Option<&'a str>,
    error_info: Option<&'a ErrorSubtype>,
    learning_path: Option<LearningPath>,
}

pub fn run(message: &str, sql: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&detect(&ctx.system, message, sql), flags.format)
}

fn detect<'a>(system: &'a ConceptMappingSystem, message: &str, sql: &str) -> Detection<'a> {
    let error_subtype = system.detect_error_subtype(message, sql);
    if error_subtype.is_none() {
        tracing::info!("no error subtype matched");
    }

    Detection {
        error_subtype,
        error_info: error_subtype.and_then(|key| system.get_error_info(key)),
        learning_path: error_subtype.and_then(|key| system.get_learning_path(key)),
    }
}
