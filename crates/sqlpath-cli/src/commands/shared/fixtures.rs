use sqlpath_mapping::builtin::{alignment_map_manifest, error_subtypes_manifest};
use sqlpath_mapping::{ConceptMappingSystem, ManifestSet};

/// Bundled catalogs over an empty concept registry.
pub fn bundled_system() -> ConceptMappingSystem {
    let registry = serde_json::json!({
        "schemaVersion": "concept-registry-v1",
        "totalConcepts": 0,
        "concepts": {}
    });
    ManifestSet::from_values(
        serde_json::to_value(error_subtypes_manifest()).unwrap(),
        serde_json::to_value(alignment_map_manifest()).unwrap(),
        registry,
    )
    .unwrap()
    .into_system()
}
