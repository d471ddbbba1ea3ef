mod concept;
mod error;

pub use concept::ConceptCommands;
pub use error::ErrorCommands;
