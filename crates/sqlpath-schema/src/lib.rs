//! # sqlpath-schema
//!
//! JSON Schema generation and validation for sqlpath.
//!
//! Manifest and response types are defined in `sqlpath-core` with
//! `#[derive(JsonSchema)]`. This crate builds the schemas once and validates
//! raw JSON against them, so a malformed manifest is rejected with every
//! offending path listed instead of only the first serde error.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{
    ALIGNMENT_MAP_MANIFEST, CONCEPT_REGISTRY_MANIFEST, ERROR_SUBTYPES_MANIFEST, SchemaRegistry,
};
