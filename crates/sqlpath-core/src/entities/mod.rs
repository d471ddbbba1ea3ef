//! Entity structs for the three manifest layers.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so manifests
//! can be validated against generated schemas before they are decoded.

mod alignment;
mod concept;
mod error_subtype;

pub use alignment::AlignmentMapping;
pub use concept::ConceptInfo;
pub use error_subtype::ErrorSubtype;
