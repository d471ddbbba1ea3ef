//! Manifest loading: raw JSON → schema check → typed manifest.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlpath_core::manifests::{AlignmentMapManifest, ConceptRegistryManifest, ErrorSubtypesManifest};
use sqlpath_schema::SchemaRegistry;

use crate::error::{ManifestError, ManifestKind};
use crate::system::ConceptMappingSystem;

/// A manifest document that can be loaded from JSON.
pub trait Manifest: DeserializeOwned {
    const KIND: ManifestKind;
}

impl Manifest for ErrorSubtypesManifest {
    const KIND: ManifestKind = ManifestKind::ErrorSubtypes;
}

impl Manifest for AlignmentMapManifest {
    const KIND: ManifestKind = ManifestKind::AlignmentMap;
}

impl Manifest for ConceptRegistryManifest {
    const KIND: ManifestKind = ManifestKind::ConceptRegistry;
}

/// Validate and decode an already-parsed manifest document.
///
/// # Errors
///
/// [`ManifestError::Malformed`] if the document is not an object or fails
/// typed decoding, [`ManifestError::Schema`] if it violates the schema.
pub fn parse_manifest<M: Manifest>(
    schemas: &SchemaRegistry,
    value: Value,
) -> Result<M, ManifestError> {
    if !value.is_object() {
        return Err(ManifestError::Malformed {
            manifest: M::KIND,
            reason: format!("expected a JSON object, found {}", json_type(&value)),
        });
    }

    schemas
        .validate(M::KIND.schema_name(), &value)
        .map_err(|source| {
            tracing::warn!(manifest = %M::KIND, error = %source, "manifest failed schema validation");
            ManifestError::Schema {
                manifest: M::KIND,
                source,
            }
        })?;

    serde_json::from_value(value).map_err(|e| ManifestError::Malformed {
        manifest: M::KIND,
        reason: e.to_string(),
    })
}

/// Parse manifest JSON text.
///
/// # Errors
///
/// As [`parse_manifest`], plus [`ManifestError::Malformed`] for invalid JSON.
pub fn parse_manifest_str<M: Manifest>(
    schemas: &SchemaRegistry,
    text: &str,
) -> Result<M, ManifestError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ManifestError::Malformed {
        manifest: M::KIND,
        reason: format!("invalid JSON: {e}"),
    })?;
    parse_manifest(schemas, value)
}

/// Read and parse a manifest file.
///
/// # Errors
///
/// [`ManifestError::Read`] if the file cannot be read, otherwise as
/// [`parse_manifest_str`].
pub fn load_manifest<M: Manifest>(
    schemas: &SchemaRegistry,
    path: &Path,
) -> Result<M, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        manifest: M::KIND,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(manifest = %M::KIND, path = %path.display(), "loading manifest");
    parse_manifest_str(schemas, &text)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The three manifests of one snapshot, loaded together.
#[derive(Debug, Clone)]
pub struct ManifestSet {
    pub error_subtypes: ErrorSubtypesManifest,
    pub alignment_map: AlignmentMapManifest,
    pub concept_registry: ConceptRegistryManifest,
}

impl ManifestSet {
    /// # Errors
    ///
    /// The first manifest that fails to validate or decode.
    pub fn from_values(
        error_subtypes: Value,
        alignment_map: Value,
        concept_registry: Value,
    ) -> Result<Self, ManifestError> {
        let schemas = SchemaRegistry::new();
        Ok(Self {
            error_subtypes: parse_manifest(&schemas, error_subtypes)?,
            alignment_map: parse_manifest(&schemas, alignment_map)?,
            concept_registry: parse_manifest(&schemas, concept_registry)?,
        })
    }

    /// # Errors
    ///
    /// The first manifest that is not valid JSON or fails to validate.
    pub fn from_json_str(
        error_subtypes: &str,
        alignment_map: &str,
        concept_registry: &str,
    ) -> Result<Self, ManifestError> {
        let schemas = SchemaRegistry::new();
        Ok(Self {
            error_subtypes: parse_manifest_str(&schemas, error_subtypes)?,
            alignment_map: parse_manifest_str(&schemas, alignment_map)?,
            concept_registry: parse_manifest_str(&schemas, concept_registry)?,
        })
    }

    /// # Errors
    ///
    /// The first manifest that cannot be read, parsed, or validated.
    pub fn from_paths(
        error_subtypes: &Path,
        alignment_map: &Path,
        concept_registry: &Path,
    ) -> Result<Self, ManifestError> {
        let schemas = SchemaRegistry::new();
        Ok(Self {
            error_subtypes: load_manifest(&schemas, error_subtypes)?,
            alignment_map: load_manifest(&schemas, alignment_map)?,
            concept_registry: load_manifest(&schemas, concept_registry)?,
        })
    }

    #[must_use]
    pub fn into_system(self) -> ConceptMappingSystem {
        ConceptMappingSystem::new(self.error_subtypes, self.alignment_map, self.concept_registry)
    }
}
