use anyhow::Context;
use sqlpath_mapping::{teaching_strategies, teaching_strategy_info};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StrategyArgs;
use crate::output::output;

/// Handle `sqlpath strategy`. Reads the static table only; no manifests needed.
pub fn handle(args: &StrategyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.key.as_deref() {
        Some(key) => {
            let strategy = teaching_strategy_info(key)
                .with_context(|| format!("unknown teaching strategy '{key}'"))?;
            output(strategy, flags.format)
        }
        None => output(&teaching_strategies(), flags.format),
    }
}
