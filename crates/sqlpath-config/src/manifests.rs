//! Manifest file locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default file name of the error subtype catalog inside `dir`.
pub const ERROR_SUBTYPES_FILE: &str = "error-subtypes.json";
/// Default file name of the alignment map inside `dir`.
pub const ALIGNMENT_MAP_FILE: &str = "alignment-map.json";
/// Default file name of the concept registry inside `dir`.
pub const CONCEPT_REGISTRY_FILE: &str = "concept-registry.json";

/// Where the three manifests live.
///
/// An explicit per-manifest path wins over `dir`. Empty strings mean unset.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ManifestsConfig {
    /// Directory holding all three manifests under their default file names.
    #[serde(default)]
    pub dir: String,

    #[serde(default)]
    pub error_subtypes: String,

    #[serde(default)]
    pub alignment_map: String,

    #[serde(default)]
    pub concept_registry: String,
}

impl ManifestsConfig {
    /// The concept registry location resolves. The other two manifests fall
    /// back to the bundled catalogs, so they are optional.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.concept_registry_path().is_some()
    }

    #[must_use]
    pub fn error_subtypes_path(&self) -> Option<PathBuf> {
        self.resolve(&self.error_subtypes, ERROR_SUBTYPES_FILE)
    }

    #[must_use]
    pub fn alignment_map_path(&self) -> Option<PathBuf> {
        self.resolve(&self.alignment_map, ALIGNMENT_MAP_FILE)
    }

    #[must_use]
    pub fn concept_registry_path(&self) -> Option<PathBuf> {
        self.resolve(&self.concept_registry, CONCEPT_REGISTRY_FILE)
    }

    /// Concept registry location, or `NotConfigured`.
    pub fn require_concept_registry(&self) -> Result<PathBuf, ConfigError> {
        self.concept_registry_path()
            .ok_or(ConfigError::NotConfigured {
                manifest: "concept_registry",
            })
    }

    fn resolve(&self, explicit: &str, file_name: &str) -> Option<PathBuf> {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
        if self.dir.is_empty() {
            return None;
        }
        Some(PathBuf::from(&self.dir).join(file_name))
    }
}
