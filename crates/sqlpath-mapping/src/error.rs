//! Manifest loading error types.

use std::fmt;
use std::path::PathBuf;

use sqlpath_schema::SchemaError;
use thiserror::Error;

/// Which of the three manifests an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    ErrorSubtypes,
    AlignmentMap,
    ConceptRegistry,
}

impl ManifestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ErrorSubtypes => "error_subtypes",
            Self::AlignmentMap => "alignment_map",
            Self::ConceptRegistry => "concept_registry",
        }
    }

    /// Name of the generated schema this manifest is validated against.
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::ErrorSubtypes => sqlpath_schema::ERROR_SUBTYPES_MANIFEST,
            Self::AlignmentMap => sqlpath_schema::ALIGNMENT_MAP_MANIFEST,
            Self::ConceptRegistry => sqlpath_schema::CONCEPT_REGISTRY_MANIFEST,
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading or exporting manifests.
///
/// Queries never fail; a snapshot either constructs completely or not at all.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read {manifest} manifest {}: {source}", path.display())]
    Read {
        manifest: ManifestKind,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest is not a well-formed record of the expected shape.
    #[error("malformed {manifest} manifest: {reason}")]
    Malformed {
        manifest: ManifestKind,
        reason: String,
    },

    /// The manifest parsed as JSON but violates its schema.
    #[error("malformed {manifest} manifest: {source}")]
    Schema {
        manifest: ManifestKind,
        source: SchemaError,
    },

    /// An exported manifest could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ManifestError {
    /// The manifest this error concerns, if any.
    #[must_use]
    pub const fn manifest(&self) -> Option<ManifestKind> {
        match self {
            Self::Read { manifest, .. }
            | Self::Malformed { manifest, .. }
            | Self::Schema { manifest, .. } => Some(*manifest),
            Self::Write { .. } => None,
        }
    }

    /// Whether this is a structural problem with the manifest content rather
    /// than an I/O failure.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Schema { .. })
    }
}
