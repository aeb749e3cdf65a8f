//! Structured logging schema and field name constants.
//!
//! Both crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across the
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable data hazard (slug collision, dropped property) |
//! | INFO  | Editor lifecycle events (open, template load) |
//! | DEBUG | Decision points (mode transitions, apply outcomes) |
//! | TRACE | Per-field iteration during synthesis/parsing |

/// Subsystem originating the log event.
/// Values: "extraction"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within the subsystem.
/// Examples: "synthesizer", "parser", "editor", "templates"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "synthesize", "parse", "apply_json", "load_template"
pub const OPERATION: &str = "op";

/// Extraction field UUID being operated on.
pub const FIELD_ID: &str = "field_id";

/// Number of fields in the model after an operation.
pub const FIELD_COUNT: &str = "field_count";

/// Slugified property key emitted into or read from a schema document.
pub const PROPERTY_KEY: &str = "property_key";

/// Template preset name being loaded.
pub const TEMPLATE: &str = "template";

/// Active editor mode ("builder" or "json").
pub const MODE: &str = "mode";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
