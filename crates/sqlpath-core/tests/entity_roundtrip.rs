//! Serde roundtrip and JsonSchema validation tests for manifest and response types.

use schemars::schema_for;
use sqlpath_core::catalog::KeyedCatalog;
use sqlpath_core::entities::*;
use sqlpath_core::enums::*;
use sqlpath_core::manifests::*;
use sqlpath_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn select_basic() -> ConceptInfo {
    ConceptInfo {
        id: "select-basic".into(),
        title: "SELECT Statement Basics".into(),
        description: "Retrieve columns from a table".into(),
        difficulty: Difficulty::Beginner,
        estimated_read_time: 5.0,
        category: "SELECT Basics".into(),
        content_location: "concepts/select-basic.md".into(),
        quality_status: QualityStatus::Verified,
        learning_objectives: vec!["Write a basic SELECT".into()],
    }
}

fn missing_comma() -> ErrorSubtype {
    ErrorSubtype {
        id: 4,
        name: "Missing Comma in SELECT".into(),
        severity: Severity::Error,
        category: ErrorCategory::Syntax,
    }
}

roundtrip_and_validate!(error_subtype_roundtrip, ErrorSubtype, missing_comma());

roundtrip_and_validate!(
    alignment_mapping_roundtrip,
    AlignmentMapping,
    AlignmentMapping {
        error_subtype_id: 4,
        concept_ids: vec!["select-basic".into(), "syntax-error".into()],
        confidence: Confidence::Verified,
        teaching_strategy: Some("syntax_drill".into()),
        remediation_order: vec!["syntax-error".into(), "select-basic".into()],
    }
);

roundtrip_and_validate!(concept_info_roundtrip, ConceptInfo, select_basic());

roundtrip_and_validate!(
    error_subtypes_manifest_roundtrip,
    ErrorSubtypesManifest,
    ErrorSubtypesManifest {
        schema_version: "error-subtypes-v1".into(),
        description: "SQL-Engage error subtype definitions".into(),
        created_at: "2026-02-26T00:00:00Z".into(),
        total_subtypes: 1,
        subtypes: [("missing_comma_in_select", missing_comma())]
            .into_iter()
            .collect(),
    }
);

roundtrip_and_validate!(
    concept_registry_manifest_roundtrip,
    ConceptRegistryManifest,
    ConceptRegistryManifest {
        schema_version: "concept-registry-v1".into(),
        description: String::new(),
        created_at: "2026-02-26T00:00:00Z".into(),
        total_concepts: 1,
        concepts: [("select-basic", select_basic())].into_iter().collect(),
        statistics: RegistryStatistics {
            by_difficulty: [("beginner", 1)].into_iter().collect(),
            ..RegistryStatistics::default()
        },
        learning_paths: [("foundations", vec!["select-basic".to_string()])]
            .into_iter()
            .collect(),
    }
);

roundtrip_and_validate!(
    learning_path_roundtrip,
    LearningPath,
    LearningPath {
        error_subtype: "missing_comma_in_select".into(),
        error_info: missing_comma(),
        teaching_strategy: None,
        concepts: vec![select_basic()],
        total_read_time: 5.0,
        difficulty: Difficulty::Beginner,
    }
);

roundtrip_and_validate!(
    validation_report_roundtrip,
    ValidationReport,
    ValidationReport {
        is_valid: false,
        missing_concepts: vec!["incorrect_function_usage -> date-functions".into()],
        unmapped_errors: vec![],
    }
);

roundtrip_and_validate!(
    mapping_statistics_roundtrip,
    MappingStatistics,
    MappingStatistics {
        total_errors: 23,
        total_concepts: 29,
        total_mappings: 23,
        coverage_by_difficulty: [("advanced", 6), ("beginner", 12)].into_iter().collect(),
    }
);

#[test]
fn concept_schema_rejects_unknown_difficulty() {
    let schema = serde_json::to_value(schema_for!(ConceptInfo)).unwrap();
    let mut instance = serde_json::to_value(select_basic()).unwrap();
    instance["difficulty"] = serde_json::json!("expert");
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn concept_schema_accepts_fractional_but_not_negative_read_time() {
    let schema = serde_json::to_value(schema_for!(ConceptInfo)).unwrap();
    let mut instance = serde_json::to_value(select_basic()).unwrap();

    instance["estimatedReadTime"] = serde_json::json!(7.5);
    assert!(validate_against_schema(&schema, &instance).is_empty());

    instance["estimatedReadTime"] = serde_json::json!(-0.5);
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn manifest_schema_rejects_non_object_collection() {
    let schema = serde_json::to_value(schema_for!(ErrorSubtypesManifest)).unwrap();
    let instance = serde_json::json!({
        "schemaVersion": "error-subtypes-v1",
        "totalSubtypes": 0,
        "subtypes": []
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn empty_catalog_serializes_as_object() {
    let catalog: KeyedCatalog<ErrorSubtype> = KeyedCatalog::new();
    assert_eq!(serde_json::to_string(&catalog).unwrap(), "{}");
}
