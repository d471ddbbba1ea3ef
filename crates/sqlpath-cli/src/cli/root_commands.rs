use clap::{Args, Subcommand};

use crate::cli::subcommands::{ConceptCommands, ErrorCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Error catalog and alignment lookups.
    Error {
        #[command(subcommand)]
        action: ErrorCommands,
    },
    /// Concept registry lookups.
    Concept {
        #[command(subcommand)]
        action: ConceptCommands,
    },
    /// Learning path for an error subtype.
    Path(PathArgs),
    /// Curated learning paths declared by the registry.
    Curated(CuratedArgs),
    /// Check references between the three manifests.
    Validate,
    /// Declared manifest totals.
    Stats,
    /// Teaching strategy descriptions.
    Strategy(StrategyArgs),
    /// Write the bundled error catalog and alignment map.
    Export(ExportArgs),
    /// Print a generated JSON Schema.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PathArgs {
    /// Error subtype key.
    pub key: String,
}

#[derive(Clone, Debug, Args)]
pub struct CuratedArgs {
    /// Path name; lists available paths when omitted.
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct StrategyArgs {
    /// Strategy key; lists every strategy when omitted.
    pub key: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(long, short)]
    pub out: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; lists registered names when omitted.
    pub name: Option<String>,
}
