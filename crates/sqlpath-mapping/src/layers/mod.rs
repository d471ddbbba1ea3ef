//! Query layers over the manifest snapshot.
//!
//! Each module adds methods to `ConceptMappingSystem` via `impl ConceptMappingSystem` blocks.

pub mod alignment;
pub mod concepts;
pub mod diagnostics;
pub mod errors;
pub mod paths;
