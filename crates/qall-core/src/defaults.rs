//! Centralized default constants for the Qall extraction engine.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own
//! magic values.

// =============================================================================
// ENUM FIELDS
// =============================================================================

/// Placeholder options seeded when a field's type becomes `enum` with no
/// prior options. Gives the user something concrete to rename rather than
/// an empty list that would be dropped from synthesis.
pub const ENUM_PLACEHOLDER_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];
