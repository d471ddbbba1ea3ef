//! # sqlpath-mapping
//!
//! Resolves SQL errors to ordered, readable learning paths through three
//! layers:
//!
//! 1. **Error catalog**: subtype keys → [`ErrorSubtype`](sqlpath_core::entities::ErrorSubtype),
//!    plus regex classification of raw diagnostic messages.
//! 2. **Alignment map**: subtype → concept ids, confidence, teaching strategy.
//! 3. **Concept registry**: concept id → [`ConceptInfo`](sqlpath_core::entities::ConceptInfo).
//!
//! A [`ConceptMappingSystem`] is an immutable snapshot of all three
//! manifests. Lookups never fail: unknown keys produce `None` or an empty
//! result, and referential gaps are tolerated at query time and surfaced by
//! [`ConceptMappingSystem::validate_mapping`]. Only loading a malformed
//! manifest is an error.
//!
//! ```no_run
//! use std::path::Path;
//! use sqlpath_mapping::ManifestSet;
//!
//! let system = ManifestSet::from_paths(
//!     Path::new("error-subtypes.json"),
//!     Path::new("alignment-map.json"),
//!     Path::new("concept-registry.json"),
//! )?
//! .into_system();
//!
//! if let Some(key) = system.detect_error_subtype(r#"near "name": syntax error"#, "") {
//!     let path = system.get_learning_path(key);
//!     println!("{path:?}");
//! }
//! # Ok::<(), sqlpath_mapping::ManifestError>(())
//! ```

pub mod builtin;
pub mod classify;
pub mod error;
pub mod layers;
pub mod loader;
pub mod strategies;
pub mod system;

mod test_support;

pub use classify::{ErrorClassifier, PatternRule};
pub use error::{ManifestError, ManifestKind};
pub use layers::paths::{overall_difficulty, total_read_time};
pub use loader::{Manifest, ManifestSet, load_manifest, parse_manifest, parse_manifest_str};
pub use strategies::{TeachingStrategy, teaching_strategies, teaching_strategy_info};
pub use system::{ConceptMappingSystem, create_concept_mapping_system};
