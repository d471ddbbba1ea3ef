//! Manifest envelopes for the three layers.
//!
//! Each manifest carries `schemaVersion`, `description`, `createdAt`, a
//! declared total, and a keyed entity collection. The metadata fields and the
//! declared totals are passthrough: they are never checked against the
//! collections they describe.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::KeyedCatalog;
use crate::entities::{AlignmentMapping, ConceptInfo, ErrorSubtype};

/// Layer 1: error subtype catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSubtypesManifest {
    pub schema_version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    pub total_subtypes: u32,
    pub subtypes: KeyedCatalog<ErrorSubtype>,
}

/// Layer 2: error subtype → concept alignment map.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentMapManifest {
    pub schema_version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    pub total_mappings: u32,
    pub mappings: KeyedCatalog<AlignmentMapping>,
}

/// Layer 3: concept registry with textbook content metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConceptRegistryManifest {
    pub schema_version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    pub total_concepts: u32,
    pub concepts: KeyedCatalog<ConceptInfo>,
    #[serde(default)]
    pub statistics: RegistryStatistics,
    /// Named, curated concept sequences.
    #[serde(default)]
    pub learning_paths: KeyedCatalog<Vec<String>>,
}

/// Precomputed registry breakdowns, as declared by the registry producer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatistics {
    #[serde(default)]
    pub by_difficulty: KeyedCatalog<u32>,
    #[serde(default)]
    pub by_category: KeyedCatalog<u32>,
    #[serde(default)]
    pub total_practice_problems: u32,
    #[serde(default)]
    pub coverage_by_status: KeyedCatalog<u32>,
}
