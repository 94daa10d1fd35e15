//! # medstudy-schema
//!
//! JSON Schema generation, validation, and registry for MedStudy.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Validation of whole persisted documents before they replace live state
//!   (`medstudy data import`)
//! - Schema export for external tooling (`medstudy schema` command)
//!
//! ## Architecture
//!
//! Entity types are defined in `medstudy-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation layer.
//! `medstudy-store` depends on it for import validation.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
