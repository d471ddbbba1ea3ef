//! Enumerated manifest fields.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Confidence` and `Difficulty` are ordinal: their variants are declared in
//! ascending order so the derived `Ord` matches the manifest semantics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a unit enum.
macro_rules! string_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the string representation used in manifests.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| CoreError::InvalidValue {
                        field: $field,
                        value: raw.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|variant| variant.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How serious a detected error subtype is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

string_enum!(Severity, "severity", {
    Error => "error",
    Warning => "warning",
    Info => "info",
});

// ---------------------------------------------------------------------------
// ErrorCategory
// ---------------------------------------------------------------------------

/// Broad family an error subtype belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Syntax,
    Logic,
    Completeness,
}

string_enum!(ErrorCategory, "error category", {
    Syntax => "syntax",
    Logic => "logic",
    Completeness => "completeness",
});

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Quality grade of an alignment mapping.
///
/// ```text
/// low < medium < high < verified
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Verified,
}

impl Confidence {
    /// Whether a mapping at this grade may feed automatic recommendations.
    ///
    /// Only `low` is rejected.
    #[must_use]
    pub const fn is_trusted(self) -> bool {
        matches!(self, Self::Medium | Self::High | Self::Verified)
    }
}

string_enum!(Confidence, "confidence", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Verified => "verified",
});

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty level of a concept.
///
/// ```text
/// beginner < intermediate < advanced
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

string_enum!(Difficulty, "difficulty", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

// ---------------------------------------------------------------------------
// QualityStatus
// ---------------------------------------------------------------------------

/// Publication status of a concept's textbook content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QualityStatus {
    Verified,
    Draft,
    Deprecated,
}

string_enum!(QualityStatus, "quality status", {
    Verified => "verified",
    Draft => "draft",
    Deprecated => "deprecated",
});
