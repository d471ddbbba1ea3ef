//! Derived values returned by cross-layer queries.
//!
//! None of these are stored: they are built fresh per query from the
//! manifest snapshot and serialized as JSON by the `sqlpath` CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::KeyedCatalog;
use crate::entities::{ConceptInfo, ErrorSubtype};
use crate::enums::Difficulty;

/// Complete error → concepts → content resolution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub error_subtype: String,
    pub error_info: ErrorSubtype,
    pub teaching_strategy: Option<String>,
    pub concepts: Vec<ConceptInfo>,
    /// Sum of `estimated_read_time` over `concepts`, in minutes.
    pub total_read_time: f64,
    /// Highest difficulty among `concepts`; `beginner` when empty.
    pub difficulty: Difficulty,
}

/// A named concept sequence declared by the registry, resolved to content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CuratedPath {
    pub name: String,
    pub concepts: Vec<ConceptInfo>,
    pub total_read_time: f64,
    pub difficulty: Difficulty,
}

/// Referential integrity report between the three manifests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// `"<errorKey> -> <conceptId>"` for every alignment reference the
    /// registry cannot resolve.
    pub missing_concepts: Vec<String>,
    /// Catalog keys without an alignment mapping.
    pub unmapped_errors: Vec<String>,
}

/// Declared manifest totals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MappingStatistics {
    pub total_errors: u32,
    pub total_concepts: u32,
    pub total_mappings: u32,
    /// The registry's `byDifficulty` block, in its declared order.
    pub coverage_by_difficulty: KeyedCatalog<u32>,
}
