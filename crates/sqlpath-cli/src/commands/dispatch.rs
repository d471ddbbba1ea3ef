use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command that reads the manifest snapshot.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Error { action } => commands::error::handle(action, ctx, flags),
        Commands::Concept { action } => commands::concept::handle(action, ctx, flags),
        Commands::Path(args) => commands::path::handle(args, ctx, flags),
        Commands::Curated(args) => commands::curated::handle(args, ctx, flags),
        Commands::Validate => commands::validate::handle(ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Strategy(_) | Commands::Export(_) | Commands::Schema(_) => {
            unreachable!("strategy/export/schema are pre-dispatched in main")
        }
    }
}
