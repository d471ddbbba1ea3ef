//! Bundled error subtype catalog and alignment map.
//!
//! These cover the 23 SQL-Engage error subtypes. Deployments usually supply
//! their own concept registry; the catalog and alignment map change rarely,
//! so the CLI falls back to these when no manifest file is configured.

use std::path::Path;

use serde::Serialize;
use sqlpath_core::catalog::KeyedCatalog;
use sqlpath_core::entities::{AlignmentMapping, ErrorSubtype};
use sqlpath_core::enums::{Confidence, ErrorCategory, Severity};
use sqlpath_core::manifests::{AlignmentMapManifest, ErrorSubtypesManifest};

use crate::error::ManifestError;

const CREATED_AT: &str = "2026-02-26T00:00:00Z";

struct SubtypeRow {
    key: &'static str,
    name: &'static str,
    severity: Severity,
    category: ErrorCategory,
}

struct MappingRow {
    key: &'static str,
    concept_ids: &'static [&'static str],
    confidence: Confidence,
    strategy: &'static str,
    order: &'static [&'static str],
}

macro_rules! subtypes {
    ($($key:literal => $name:literal, $severity:ident, $category:ident;)+) => {
        &[$(SubtypeRow {
            key: $key,
            name: $name,
            severity: Severity::$severity,
            category: ErrorCategory::$category,
        }),+]
    };
}

/// Declaration order doubles as the numeric id (1-based).
const SUBTYPES: &[SubtypeRow] = subtypes! {
    "incomplete_query" => "Incomplete Query", Error, Completeness;
    "incorrect_select_usage" => "Incorrect SELECT Usage", Error, Syntax;
    "incorrect_wildcard_usage" => "Incorrect Wildcard Usage", Warning, Syntax;
    "missing_comma_in_select" => "Missing Comma in SELECT", Error, Syntax;
    "extra_comma_in_select" => "Extra Comma in SELECT", Error, Syntax;
    "missing_where_clause" => "Missing WHERE Clause", Warning, Logic;
    "incorrect_operator_usage" => "Incorrect Operator Usage", Error, Logic;
    "incorrect_function_usage" => "Incorrect Function Usage", Error, Logic;
    "incorrect_parentheses" => "Incorrect Parentheses", Error, Syntax;
    "incorrect_null_comparison" => "Incorrect NULL Comparison", Error, Logic;
    "incorrect_join_type" => "Incorrect JOIN Type", Error, Logic;
    "missing_join_condition" => "Missing JOIN Condition", Error, Syntax;
    "incorrect_join_table_order" => "Incorrect JOIN Table Order", Warning, Logic;
    "missing_group_by" => "Missing GROUP BY", Error, Logic;
    "incorrect_group_by_columns" => "Incorrect GROUP BY Columns", Error, Logic;
    "having_without_group_by" => "HAVING Without GROUP BY", Warning, Logic;
    "incorrect_aggregate_function" => "Incorrect Aggregate Function", Error, Logic;
    "incorrect_union_usage" => "Incorrect UNION Usage", Error, Syntax;
    "incompatible_columns_in_union" => "Incompatible Columns in UNION", Error, Logic;
    "incorrect_subquery_usage" => "Incorrect Subquery Usage", Error, Logic;
    "correlated_subquery_error" => "Correlated Subquery Error", Error, Logic;
    "ambiguous_column_reference" => "Ambiguous Column Reference", Error, Syntax;
    "undefined_alias" => "Undefined Alias", Error, Syntax;
};

macro_rules! mappings {
    ($($key:literal => [$($concept:literal),*], $confidence:ident, $strategy:literal, [$($step:literal),*];)+) => {
        &[$(MappingRow {
            key: $key,
            concept_ids: &[$($concept),*],
            confidence: Confidence::$confidence,
            strategy: $strategy,
            order: &[$($step),*],
        }),+]
    };
}

/// Same order as `SUBTYPES`; each mapping points back at the subtype with the
/// same position.
const MAPPINGS: &[MappingRow] = mappings! {
    "incomplete_query" => ["select-basic", "syntax-error"], High, "start_fundamentals",
        ["select-basic", "syntax-error"];
    "incorrect_select_usage" => ["select-basic", "distinct"], High, "select_mastery",
        ["select-basic", "distinct"];
    "incorrect_wildcard_usage" => ["select-basic"], Medium, "explicit_columns",
        ["select-basic"];
    "missing_comma_in_select" => ["select-basic", "syntax-error"], Verified, "syntax_drill",
        ["syntax-error", "select-basic"];
    "extra_comma_in_select" => ["select-basic", "syntax-error"], Verified, "syntax_drill",
        ["syntax-error", "select-basic"];
    "missing_where_clause" => ["where-clause"], High, "filtering_basics",
        ["where-clause"];
    "incorrect_operator_usage" => ["where-clause", "logical-operators", "comparison-operators"],
        Medium, "operator_mastery", ["logical-operators", "where-clause"];
    "incorrect_function_usage" => ["string-functions", "date-functions", "aggregate-functions"],
        Medium, "function_basics", ["string-functions", "date-functions"];
    "incorrect_parentheses" => ["logical-operators"], High, "precedence_drill",
        ["logical-operators"];
    "incorrect_null_comparison" => ["null-handling", "is-null-operator"], Verified,
        "null_mastery", ["null-handling"];
    "incorrect_join_type" => ["joins", "inner-join", "outer-join"], High, "join_types",
        ["joins", "inner-join", "outer-join"];
    "missing_join_condition" => ["joins", "join-condition-missing", "on-clause"], Verified,
        "join_conditions", ["joins", "join-condition-missing"];
    "incorrect_join_table_order" => ["joins"], Medium, "join_basics", ["joins"];
    "missing_group_by" => ["group-by", "group-by-error", "aggregation"], Verified,
        "group_by_mastery", ["aggregation", "group-by"];
    "incorrect_group_by_columns" => ["group-by", "group-by-error"], High, "group_by_drill",
        ["group-by"];
    "having_without_group_by" => ["having-clause", "group-by"], Verified, "having_basics",
        ["group-by", "having-clause"];
    "incorrect_aggregate_function" => ["aggregation", "count-function", "sum-function", "avg-function"],
        Medium, "aggregate_functions", ["aggregation"];
    "incorrect_union_usage" => ["union", "union-all"], High, "set_operations",
        ["union", "union-all"];
    "incompatible_columns_in_union" => ["union", "data-types"], Medium, "union_compatibility",
        ["union"];
    "incorrect_subquery_usage" => ["subqueries", "in-operator", "exists-operator"], High,
        "subquery_basics", ["subqueries"];
    "correlated_subquery_error" => ["correlated-subquery", "subqueries"], Medium,
        "correlated_subqueries", ["subqueries", "correlated-subquery"];
    "ambiguous_column_reference" => ["alias", "ambiguous-column", "table-alias"], Verified,
        "aliasing", ["alias", "ambiguous-column"];
    "undefined_alias" => ["alias", "column-alias"], High, "alias_scope", ["alias"];
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn position_id(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// The bundled 23-entry error subtype catalog.
#[must_use]
pub fn error_subtypes_manifest() -> ErrorSubtypesManifest {
    let subtypes: KeyedCatalog<ErrorSubtype> = SUBTYPES
        .iter()
        .enumerate()
        .map(|(index, row)| {
            (
                row.key,
                ErrorSubtype {
                    id: position_id(index),
                    name: row.name.to_string(),
                    severity: row.severity,
                    category: row.category,
                },
            )
        })
        .collect();

    ErrorSubtypesManifest {
        schema_version: "error-subtypes-v1".into(),
        description: "SQL-Engage error subtype definitions".into(),
        created_at: CREATED_AT.into(),
        total_subtypes: count(subtypes.len()),
        subtypes,
    }
}

/// The bundled 23-entry alignment map.
#[must_use]
pub fn alignment_map_manifest() -> AlignmentMapManifest {
    let mappings: KeyedCatalog<AlignmentMapping> = MAPPINGS
        .iter()
        .enumerate()
        .map(|(index, row)| {
            (
                row.key,
                AlignmentMapping {
                    error_subtype_id: position_id(index),
                    concept_ids: owned(row.concept_ids),
                    confidence: row.confidence,
                    teaching_strategy: Some(row.strategy.to_string()),
                    remediation_order: owned(row.order),
                },
            )
        })
        .collect();

    AlignmentMapManifest {
        schema_version: "alignment-map-v1".into(),
        description: "Maps SQL error subtypes to educational concept IDs".into(),
        created_at: CREATED_AT.into(),
        total_mappings: count(mappings.len()),
        mappings,
    }
}

/// Write the bundled catalog to `path` as pretty-printed JSON.
///
/// # Errors
///
/// [`ManifestError::Write`] if the parent directory or file cannot be written.
pub fn export_error_subtypes(path: &Path) -> Result<(), ManifestError> {
    write_pretty(path, &error_subtypes_manifest())
}

/// Write the bundled alignment map to `path` as pretty-printed JSON.
///
/// # Errors
///
/// [`ManifestError::Write`] if the parent directory or file cannot be written.
pub fn export_alignment_map(path: &Path) -> Result<(), ManifestError> {
    write_pretty(path, &alignment_map_manifest())
}

fn write_pretty(path: &Path, manifest: &impl Serialize) -> Result<(), ManifestError> {
    let write_error = |source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut json = serde_json::to_string_pretty(manifest)
        .map_err(|e| write_error(std::io::Error::other(e)))?;
    json.push('\n');
    std::fs::write(path, json).map_err(write_error)?;

    tracing::debug!(path = %path.display(), "exported manifest");
    Ok(())
}
