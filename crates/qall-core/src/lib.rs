//! # qall-core
//!
//! Core types and utilities for the Qall structured-data extraction engine.
//!
//! This crate provides the foundational data structures (the extraction
//! Field Model), error types, and string utilities that the
//! `qall-extraction` crate builds on.

pub mod defaults;
pub mod error;
pub mod fields;
pub mod ids;
pub mod logging;
pub mod slug;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use fields::{ExtractionField, FieldPatch, FieldType};
pub use ids::new_v7;
pub use slug::{humanize, slugify};
