//! Registry of generated JSON Schemas for sqlpath types.
//!
//! The `SchemaRegistry` builds schemas from sqlpath-core types at construction
//! time using [`schemars::schema_for!`] and validates instances via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Schema name for the error subtype catalog.
pub const ERROR_SUBTYPES_MANIFEST: &str = "error_subtypes_manifest";
/// Schema name for the alignment map.
pub const ALIGNMENT_MAP_MANIFEST: &str = "alignment_map_manifest";
/// Schema name for the concept registry.
pub const CONCEPT_REGISTRY_MANIFEST: &str = "concept_registry_manifest";

/// Generated schemas keyed by name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

/// Insert the schema for `$ty` under `$name`. `schemars` output is always
/// JSON-serialisable, so the conversion cannot fail in practice.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry containing the manifest, entity, and response schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated schema,
    /// which does not happen for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        use sqlpath_core::{entities, manifests, responses};

        let mut schemas = HashMap::new();

        // --- Manifests (3) ---
        register!(
            schemas,
            ERROR_SUBTYPES_MANIFEST,
            manifests::ErrorSubtypesManifest
        );
        register!(
            schemas,
            ALIGNMENT_MAP_MANIFEST,
            manifests::AlignmentMapManifest
        );
        register!(
            schemas,
            CONCEPT_REGISTRY_MANIFEST,
            manifests::ConceptRegistryManifest
        );

        // --- Entities (3) ---
        register!(schemas, "error_subtype", entities::ErrorSubtype);
        register!(schemas, "alignment_mapping", entities::AlignmentMapping);
        register!(schemas, "concept_info", entities::ConceptInfo);

        // --- Responses (4) ---
        register!(schemas, "learning_path", responses::LearningPath);
        register!(schemas, "curated_path", responses::CuratedPath);
        register!(schemas, "validation_report", responses::ValidationReport);
        register!(schemas, "mapping_statistics", responses::MappingStatistics);

        Self { schemas }
    }

    /// Get a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// `SchemaError::UnknownSchema` for an unregistered name,
    /// `SchemaError::Compile` if the schema cannot be compiled, and
    /// `SchemaError::Invalid` listing every violation otherwise.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            schema: name.to_string(),
            reason: e.to_string(),
        })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// Registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
