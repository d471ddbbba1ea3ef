use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sqlpath path`.
pub fn handle(args: &PathArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = ctx
        .system
        .get_learning_path(&args.key)
        .with_context(|| format!("unknown error subtype '{}'", args.key))?;
    output(&path, flags.format)
}
