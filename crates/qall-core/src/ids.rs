//! Identifier generation for extraction fields.
//!
//! Field identity is an opaque UUIDv7: stable for the field's lifetime,
//! never reused, and never derived from the field's name (renaming a field
//! must not change its identity, or edit continuity in the field list
//! breaks).

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// UUIDv7 embeds a Unix timestamp (milliseconds) in the first 48 bits, so
/// ids created later sort lexicographically after earlier ones.
///
/// # Example
///
/// ```
/// use qall_core::ids::new_v7;
///
/// let a = new_v7();
/// let b = new_v7();
/// assert_ne!(a, b);
/// ```
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}
