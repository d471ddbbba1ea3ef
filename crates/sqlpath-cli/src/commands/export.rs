use std::path::{Path, PathBuf};

use serde::Serialize;
use sqlpath_config::{ALIGNMENT_MAP_FILE, ERROR_SUBTYPES_FILE};
use sqlpath_mapping::builtin::{export_alignment_map, export_error_subtypes};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportReport {
    error_subtypes: PathBuf,
    alignment_map: PathBuf,
}

/// Handle `sqlpath export`.
pub fn handle(args: &ExportArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&export_to(Path::new(&args.out))?, flags.format)
}

fn export_to(dir: &Path) -> anyhow::Result<ExportReport> {
    let report = ExportReport {
        error_subtypes: dir.join(ERROR_SUBTYPES_FILE),
        alignment_map: dir.join(ALIGNMENT_MAP_FILE),
    };
    export_error_subtypes(&report.error_subtypes)?;
    export_alignment_map(&report.alignment_map)?;
    Ok(report)
}
