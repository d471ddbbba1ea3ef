use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ErrorCategory, Severity};

/// A named classification of a SQL mistake (layer 1).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorSubtype {
    pub id: u32,
    pub name: String,
    pub severity: Severity,
    pub category: ErrorCategory,
}
