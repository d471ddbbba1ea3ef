//! Raw diagnostic text → error subtype classification (layer 1).
//!
//! Pattern sets overlap (a NULL-related message can also look like a generic
//! syntax error), so the table is an explicit ordered list and the first
//! subtype with any matching pattern wins. The order is part of the contract.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Built-in priority table, highest priority first.
pub const DEFAULT_PATTERNS: &[(&str, &[&str])] = &[
    (
        "missing_comma_in_select",
        &[
            r#"near ".*": syntax error"#,
            r"missing comma",
            r#"syntax error at or near "FROM""#,
        ],
    ),
    ("extra_comma_in_select", &[r#"near "\)": syntax error"#]),
    ("missing_where_clause", &[r"where clause"]),
    ("missing_join_condition", &[r"join.*condition", r"on clause"]),
    (
        "missing_group_by",
        &[r"group by", r"must appear in the group by"],
    ),
    (
        "ambiguous_column_reference",
        &[r"ambiguous column", r"ambiguous attribute"],
    ),
    (
        "incorrect_null_comparison",
        &[r"null", r"operator does not exist"],
    ),
];

static DEFAULT_CLASSIFIER: LazyLock<ErrorClassifier> = LazyLock::new(|| {
    ErrorClassifier::from_table(DEFAULT_PATTERNS).expect("hardcoded regex")
});

/// One subtype and its patterns, in declaration order.
#[derive(Debug, Clone)]
pub struct PatternRule {
    subtype: String,
    patterns: Vec<Regex>,
}

impl PatternRule {
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Pattern sources, in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    fn matches(&self, haystack: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(haystack))
    }
}

/// Ordered, case-insensitive pattern matcher.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rules: Vec<PatternRule>,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

impl ErrorClassifier {
    /// Compile a priority table. Patterns are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, regex::Error> {
        let rules = table
            .iter()
            .map(|(subtype, patterns)| {
                let patterns = patterns
                    .iter()
                    .map(|pattern| RegexBuilder::new(pattern).case_insensitive(true).build())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PatternRule {
                    subtype: (*subtype).to_string(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// Rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Classify a diagnostic message.
    ///
    /// `sql_text` is accepted for structural analysis of the failing
    /// statement but is not inspected yet.
    #[must_use]
    pub fn classify(&self, message: &str, sql_text: &str) -> Option<&str> {
        let _ = sql_text;
        let lowered = message.to_lowercase();
        let rule = self.rules.iter().find(|rule| rule.matches(&lowered))?;
        tracing::debug!(subtype = rule.subtype(), "classified error message");
        Some(rule.subtype())
    }
}
