use sqlpath_core::responses::ValidationReport;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sqlpath validate`. The report is always printed; an inconsistent
/// snapshot is then returned as an error so the exit status is non-zero.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.system.validate_mapping();
    output(&report, flags.format)?;
    ensure_valid(&report)
}

fn ensure_valid(report: &ValidationReport) -> anyhow::Result<()> {
    if report.is_valid {
        return Ok(());
    }
    anyhow::bail!(
        "mapping is inconsistent: {} missing concept reference(s), {} unmapped error subtype(s)",
        report.missing_concepts.len(),
        report.unmapped_errors.len()
    )
}
