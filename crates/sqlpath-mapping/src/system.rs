//! The `ConceptMappingSystem` snapshot.
//!
//! Layer queries are implemented across `crate::layers::*` as additional
//! `impl ConceptMappingSystem` blocks.

use sqlpath_core::manifests::{AlignmentMapManifest, ConceptRegistryManifest, ErrorSubtypesManifest};

use crate::classify::ErrorClassifier;

/// Immutable snapshot of the three manifests plus the detection table.
///
/// Every query is a synchronous read. To pick up new manifest contents,
/// build a new instance.
#[derive(Debug, Clone)]
pub struct ConceptMappingSystem {
    error_subtypes: ErrorSubtypesManifest,
    alignment_map: AlignmentMapManifest,
    concept_registry: ConceptRegistryManifest,
    classifier: ErrorClassifier,
}

impl ConceptMappingSystem {
    /// Build a snapshot with the default detection table.
    #[must_use]
    pub fn new(
        error_subtypes: ErrorSubtypesManifest,
        alignment_map: AlignmentMapManifest,
        concept_registry: ConceptRegistryManifest,
    ) -> Self {
        tracing::debug!(
            subtypes = error_subtypes.subtypes.len(),
            mappings = alignment_map.mappings.len(),
            concepts = concept_registry.concepts.len(),
            "built concept mapping snapshot"
        );
        Self {
            error_subtypes,
            alignment_map,
            concept_registry,
            classifier: ErrorClassifier::default(),
        }
    }

    /// Replace the detection table.
    #[must_use]
    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub const fn error_subtypes(&self) -> &ErrorSubtypesManifest {
        &self.error_subtypes
    }

    #[must_use]
    pub const fn alignment_map(&self) -> &AlignmentMapManifest {
        &self.alignment_map
    }

    #[must_use]
    pub const fn concept_registry(&self) -> &ConceptRegistryManifest {
        &self.concept_registry
    }

    #[must_use]
    pub const fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }
}

/// Convenience factory, equivalent to [`ConceptMappingSystem::new`].
#[must_use]
pub fn create_concept_mapping_system(
    error_subtypes: ErrorSubtypesManifest,
    alignment_map: AlignmentMapManifest,
    concept_registry: ConceptRegistryManifest,
) -> ConceptMappingSystem {
    ConceptMappingSystem::new(error_subtypes, alignment_map, concept_registry)
}
