use serde::Serialize;
use sqlpath_core::manifests::RegistryStatistics;
use sqlpath_core::responses::MappingStatistics;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Declared totals plus the registry's own breakdown, both as written in the
/// manifests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    #[serde(flatten)]
    mapping: MappingStatistics,
    registry: &'a RegistryStatistics,
}

/// Handle `sqlpath stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = StatsReport {
        mapping: ctx.system.get_statistics(),
        registry: &ctx.system.concept_registry().statistics,
    };
    output(&report, flags.format)
}
