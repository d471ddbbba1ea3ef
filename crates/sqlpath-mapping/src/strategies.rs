//! Static teaching strategy descriptions.
//!
//! Alignment mappings name strategies by key. The table is advisory: a key
//! missing from it is not an error.

use serde::Serialize;

/// Human-readable description of a teaching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeachingStrategy {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub approach: &'static str,
}

const fn strategy(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    approach: &'static str,
) -> TeachingStrategy {
    TeachingStrategy {
        key,
        name,
        description,
        approach,
    }
}

pub const TEACHING_STRATEGIES: &[TeachingStrategy] = &[
    strategy(
        "start_fundamentals",
        "Start with Fundamentals",
        "Begin with basic SQL concepts",
        "Introduce SELECT syntax and structure first",
    ),
    strategy(
        "select_mastery",
        "SELECT Mastery",
        "Focus on SELECT statement details",
        "Practice column selection and DISTINCT",
    ),
    strategy(
        "syntax_drill",
        "Syntax Drill",
        "Repetitive practice of correct syntax",
        "Multiple exercises on comma placement",
    ),
    strategy(
        "filtering_basics",
        "Filtering Basics",
        "Learn WHERE clause fundamentals",
        "Start with simple conditions",
    ),
    strategy(
        "operator_mastery",
        "Operator Mastery",
        "Master logical and comparison operators",
        "Practice AND, OR, NOT combinations",
    ),
    strategy(
        "join_types",
        "JOIN Types",
        "Understand different JOIN operations",
        "Visual explanations of JOIN types",
    ),
    strategy(
        "join_conditions",
        "JOIN Conditions",
        "Learn ON clause syntax",
        "Practice table relationships",
    ),
    strategy(
        "group_by_mastery",
        "GROUP BY Mastery",
        "Master aggregation and grouping",
        "Understand column requirements",
    ),
    strategy(
        "set_operations",
        "Set Operations",
        "Learn UNION and related operations",
        "Practice combining result sets",
    ),
    strategy(
        "subquery_basics",
        "Subquery Basics",
        "Introduction to nested queries",
        "Start with simple IN subqueries",
    ),
    strategy(
        "aliasing",
        "Aliasing",
        "Learn table and column aliases",
        "Practice disambiguation",
    ),
];

/// Look up a strategy by key.
#[must_use]
pub fn teaching_strategy_info(key: &str) -> Option<&'static TeachingStrategy> {
    TEACHING_STRATEGIES.iter().find(|strategy| strategy.key == key)
}

/// Every known strategy, in table order.
#[must_use]
pub const fn teaching_strategies() -> &'static [TeachingStrategy] {
    TEACHING_STRATEGIES
}
