use clap::Subcommand;

/// Error subtype commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ErrorCommands {
    /// Get a catalog entry by key.
    Get { key: String },
    /// List catalog keys.
    List,
    /// Classify a raw database error message.
    Detect {
        message: String,
        /// The statement that failed.
        #[arg(long)]
        sql: Option<String>,
    },
    /// Concepts for an error (empty for low-confidence mappings).
    Concepts { key: String },
    /// Remediation order for an error.
    Order { key: String },
    /// Teaching strategy for an error.
    Strategy { key: String },
}
