//! # sqlpath-core
//!
//! Core types shared by every sqlpath crate.
//!
//! This crate provides:
//! - Entity structs for the three manifest layers (error subtypes, alignment
//!   mappings, concepts)
//! - Ordinal enums (severity, confidence, difficulty, quality status)
//! - `KeyedCatalog`, an insertion-ordered keyed collection used by every manifest
//! - Manifest envelopes with their opaque passthrough metadata
//! - Derived response types (learning paths, validation reports, statistics)
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod manifests;
pub mod responses;
