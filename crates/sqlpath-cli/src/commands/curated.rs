use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CuratedArgs;
use crate::commands::shared::limit::{catalog_limit, truncated};
use crate::context::AppContext;
use crate::output::output;

/// Handle `sqlpath curated`.
pub fn handle(args: &CuratedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(name) = args.name.as_deref() else {
        let names = truncated(ctx.system.list_curated_paths(), catalog_limit(flags.limit));
        return output(&names, flags.format);
    };

    let path = ctx
        .system
        .get_curated_path(name)
        .with_context(|| format!("unknown curated path '{name}'"))?;
    output(&path, flags.format)
}
