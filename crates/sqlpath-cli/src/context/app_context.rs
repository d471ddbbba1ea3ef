use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlpath_config::SqlPathConfig;
use sqlpath_mapping::{ConceptMappingSystem, Manifest, builtin, load_manifest};
use sqlpath_schema::SchemaRegistry;

/// Shared application resources initialized once per invocation.
pub struct AppContext {
    pub system: ConceptMappingSystem,
    pub config: SqlPathConfig,
}

impl AppContext {
    /// Load the manifest snapshot described by `config`.
    ///
    /// The concept registry is required. The error catalog and alignment map
    /// fall back to the bundled versions when no file is configured.
    pub fn init(config: SqlPathConfig) -> anyhow::Result<Self> {
        let schemas = SchemaRegistry::new();
        let manifests = &config.manifests;

        let registry_path = manifests.require_concept_registry()?;
        let concept_registry = load_from(&schemas, &registry_path)?;

        let error_subtypes = load_or_builtin(
            &schemas,
            configured_path(&manifests.error_subtypes, manifests.error_subtypes_path()),
            builtin::error_subtypes_manifest,
        )?;
        let alignment_map = load_or_builtin(
            &schemas,
            configured_path(&manifests.alignment_map, manifests.alignment_map_path()),
            builtin::alignment_map_manifest,
        )?;

        let system = ConceptMappingSystem::new(error_subtypes, alignment_map, concept_registry);
        Ok(Self { system, config })
    }
}

/// An explicitly configured path is always used. A path derived from
/// `manifests.dir` is used only when the file exists there.
fn configured_path(explicit: &str, resolved: Option<PathBuf>) -> Option<PathBuf> {
    let path = resolved?;
    (!explicit.is_empty() || path.is_file()).then_some(path)
}

fn load_or_builtin<M: Manifest>(
    schemas: &SchemaRegistry,
    path: Option<PathBuf>,
    builtin: fn() -> M,
) -> anyhow::Result<M> {
    match path {
        Some(path) => load_from(schemas, &path),
        None => {
            tracing::debug!(manifest = %M::KIND, "using bundled manifest");
            Ok(builtin())
        }
    }
}

fn load_from<M: Manifest>(schemas: &SchemaRegistry, path: &Path) -> anyhow::Result<M> {
    load_manifest(schemas, path).with_context(|| format!("failed to load {}", path.display()))
}
