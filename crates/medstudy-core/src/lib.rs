//! # medstudy-core
//!
//! Core types, ID generation, and error types for MedStudy.
//!
//! This crate provides the foundational types shared across all MedStudy crates:
//! - Entity structs for the persisted document (disciplines, study records, settings)
//! - Topic picker enums with the explicit "enter a custom topic" sentinel
//! - ID generation and well-known constants (storage key, default labels)
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
