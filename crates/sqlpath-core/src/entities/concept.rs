use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, QualityStatus};

/// A unit of instructional content (layer 3).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConceptInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Minutes; fractional values are allowed.
    #[schemars(range(min = 0))]
    pub estimated_read_time: f64,
    pub category: String,
    /// Pointer to the textbook content, opaque to sqlpath.
    pub content_location: String,
    pub quality_status: QualityStatus,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
}
