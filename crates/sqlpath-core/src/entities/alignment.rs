use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Confidence;

/// Association between an error subtype and the concepts that remediate it
/// (layer 2).
///
/// Field names follow the alignment manifest, which uses `snake_case` keys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AlignmentMapping {
    /// Back-reference to `ErrorSubtype::id`.
    pub error_subtype_id: u32,

    /// Concepts to study, in default remediation order.
    pub concept_ids: Vec<String>,

    pub confidence: Confidence,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_strategy: Option<String>,

    /// Explicit study order. May reorder or subset `concept_ids`; empty means
    /// "use `concept_ids`".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remediation_order: Vec<String>,
}

impl AlignmentMapping {
    /// The explicit remediation order when present, else the raw concept ids.
    #[must_use]
    pub fn remediation_sequence(&self) -> &[String] {
        if self.remediation_order.is_empty() {
            &self.concept_ids
        } else {
            &self.remediation_order
        }
    }

    /// Teaching strategy key, treating an empty string as unset.
    #[must_use]
    pub fn strategy(&self) -> Option<&str> {
        self.teaching_strategy
            .as_deref()
            .filter(|strategy| !strategy.is_empty())
    }
}
