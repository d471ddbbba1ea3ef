use clap::Subcommand;

/// Concept registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConceptCommands {
    /// Get a concept by ID.
    Get { id: String },
    /// List concept IDs.
    List,
    /// Concepts at a difficulty level (beginner, intermediate, advanced).
    Difficulty { level: String },
    /// Concepts in a category (exact match).
    Category { name: String },
    /// Search titles, descriptions and learning objectives.
    Search { query: String },
}
