//! The extraction Field Model.
//!
//! An [`ExtractionField`] is one user-declared datum to pull out of a call
//! transcript by the downstream language model. The ordered field list is
//! the builder-mode source of truth; the schema document is synthesized
//! from it on every change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults::ENUM_PLACEHOLDER_OPTIONS;
use crate::ids::new_v7;

// =============================================================================
// FIELD TYPE
// =============================================================================

/// The declared type of an extraction field.
///
/// Controls which schema fragment is emitted for the field and which edit
/// affordances the builder shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free-text value.
    String,
    /// Numeric value.
    Number,
    /// True/false value.
    Boolean,
    /// List of string items (item types are not configurable).
    Array,
    /// One of a fixed set of option strings.
    Enum,
}

impl FieldType {
    /// Whether this type carries an option list.
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Array => write!(f, "array"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "enum" => Ok(Self::Enum),
            _ => Err(format!("Invalid field type: {}", s)),
        }
    }
}

// =============================================================================
// EXTRACTION FIELD
// =============================================================================

/// One user-declared extraction field.
///
/// Identity (`id`) is generated on creation and stable for the field's
/// lifetime; it is list identity only and never derived from the name, so
/// renaming a field preserves edit continuity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionField {
    pub id: Uuid,
    /// Free-text label; may be empty transiently while editing. Blank-named
    /// fields are skipped by synthesis until named.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Free text guiding the downstream LLM extraction; synthesis fabricates
    /// a default when empty.
    pub description: String,
    pub required: bool,
    /// Option strings; meaningful only when `field_type` is `Enum` and kept
    /// empty for every other type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

impl ExtractionField {
    /// Create a field with a fresh id and the given name and type.
    ///
    /// Enum fields are seeded with the two placeholder options so the user
    /// has something concrete to rename.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let mut field = Self {
            id: new_v7(),
            name: name.into(),
            field_type,
            description: String::new(),
            required: false,
            enum_values: Vec::new(),
        };
        if field_type.is_enum() {
            field.enum_values = placeholder_options();
        }
        field
    }

    /// Create a blank string field (the Add Field default).
    pub fn blank() -> Self {
        Self::new("", FieldType::String)
    }

    /// Set the description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the field required (builder style).
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replace the enum option list (builder style).
    ///
    /// Ignored for non-enum fields, which must keep an empty option list.
    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        if self.field_type.is_enum() {
            self.enum_values = values;
        }
        self
    }

    /// Merge a patch into this field.
    ///
    /// The enum option invariant is evaluated against the **patched** type:
    /// a field that ends up non-enum has its options forcibly cleared, and a
    /// field that transitions into enum with no options is seeded with the
    /// two placeholders.
    pub fn apply(&mut self, patch: FieldPatch) {
        let was_enum = self.field_type.is_enum();

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(enum_values) = patch.enum_values {
            self.enum_values = enum_values;
        }

        if !self.field_type.is_enum() {
            self.enum_values.clear();
        } else if !was_enum && self.enum_values.is_empty() {
            self.enum_values = placeholder_options();
        }
    }
}

fn placeholder_options() -> Vec<String> {
    ENUM_PLACEHOLDER_OPTIONS.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// FIELD PATCH
// =============================================================================

/// Partial update for an [`ExtractionField`].
///
/// Unset members leave the corresponding attribute unchanged. Also used as
/// the preset when adding a field: unset members take the blank-field
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl FieldPatch {
    /// Create an empty patch (changes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the field type.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Replace the enum option list.
    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_values = Some(values);
        self
    }
}
