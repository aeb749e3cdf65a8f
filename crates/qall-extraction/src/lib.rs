//! # qall-extraction
//!
//! The structured-data extraction schema engine for the Qall voice-AI
//! platform.
//!
//! Operators declare a list of extraction fields (the Field Model, from
//! `qall-core`); this crate synthesizes the JSON-Schema-like document that
//! tells the downstream LLM pipeline what to pull out of a call transcript,
//! parses such documents back into editable field lists, ships canned
//! template presets, and hosts the dual-mode (builder/json) editor that
//! keeps the two representations consistent.

pub mod editor;
pub mod parse;
pub mod schema;
pub mod synthesize;
pub mod templates;

// Re-export commonly used types at crate root
pub use editor::{EditorMode, EditorOptions, JsonStatus, SchemaEditor};
pub use parse::parse_schema;
pub use schema::{PropertySchema, SchemaDocument};
pub use synthesize::synthesize;
pub use templates::TemplateKind;
