//! The schema document grammar.
//!
//! A [`SchemaDocument`] is the JSON-Schema-like artifact
//! (`{type:"object", properties, required}`) that communicates the set of
//! extraction fields to the downstream LLM pipeline. Property definitions
//! are a closed tagged union rather than loose JSON: structural validation
//! happens once, in [`PropertySchema::classify`], and everything downstream
//! works with checked branches.

use serde_json::{Map, Value};

use qall_core::FieldType;

// =============================================================================
// PROPERTY SCHEMA
// =============================================================================

/// One property definition inside a schema document.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySchema {
    /// `{type:"string"}`
    String { description: String },
    /// `{type:"number"}`
    Number { description: String },
    /// `{type:"boolean"}`
    Boolean { description: String },
    /// `{type:"array", items:{type:"string"}}`; items are always strings,
    /// nested item types are not supported.
    Array { description: String },
    /// `{type:"string", enum:[...]}`
    Enum {
        values: Vec<String>,
        description: String,
    },
}

impl PropertySchema {
    /// The property's description text.
    pub fn description(&self) -> &str {
        match self {
            Self::String { description }
            | Self::Number { description }
            | Self::Boolean { description }
            | Self::Array { description }
            | Self::Enum { description, .. } => description,
        }
    }

    /// The Field Model type this property maps to.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::String { .. } => FieldType::String,
            Self::Number { .. } => FieldType::Number,
            Self::Boolean { .. } => FieldType::Boolean,
            Self::Array { .. } => FieldType::Array,
            Self::Enum { .. } => FieldType::Enum,
        }
    }

    /// Render the JSON fragment for this property.
    ///
    /// Key order is fixed: `type`, then `enum`/`items` when present, then
    /// `description`.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        match self {
            Self::String { description } => {
                obj.insert("type".into(), Value::String("string".into()));
                obj.insert("description".into(), Value::String(description.clone()));
            }
            Self::Number { description } => {
                obj.insert("type".into(), Value::String("number".into()));
                obj.insert("description".into(), Value::String(description.clone()));
            }
            Self::Boolean { description } => {
                obj.insert("type".into(), Value::String("boolean".into()));
                obj.insert("description".into(), Value::String(description.clone()));
            }
            Self::Array { description } => {
                obj.insert("type".into(), Value::String("array".into()));
                let mut items = Map::new();
                items.insert("type".into(), Value::String("string".into()));
                obj.insert("items".into(), Value::Object(items));
                obj.insert("description".into(), Value::String(description.clone()));
            }
            Self::Enum {
                values,
                description,
            } => {
                obj.insert("type".into(), Value::String("string".into()));
                obj.insert(
                    "enum".into(),
                    Value::Array(values.iter().cloned().map(Value::String).collect()),
                );
                obj.insert("description".into(), Value::String(description.clone()));
            }
        }
        Value::Object(obj)
    }

    /// Best-effort structural classification of a raw property definition.
    ///
    /// Returns `None` when the definition is not an object (such entries are
    /// skipped silently, never an error). Classification is lenient:
    /// - a non-empty `enum` array wins regardless of the declared `type`,
    ///   with every element cast to a string;
    /// - otherwise the `type` string selects array/number/boolean;
    /// - anything else, including a missing or unrecognized `type`, falls
    ///   back to string.
    pub fn classify(def: &Value) -> Option<Self> {
        let obj = def.as_object()?;

        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        if let Some(Value::Array(raw)) = obj.get("enum") {
            if !raw.is_empty() {
                let values = raw.iter().map(option_string).collect();
                return Some(Self::Enum {
                    values,
                    description,
                });
            }
        }

        match obj.get("type").and_then(Value::as_str) {
            Some("array") => Some(Self::Array { description }),
            Some("number") => Some(Self::Number { description }),
            Some("boolean") => Some(Self::Boolean { description }),
            _ => Some(Self::String { description }),
        }
    }
}

/// Cast an arbitrary JSON value to an enum option string.
fn option_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// SCHEMA DOCUMENT
// =============================================================================

/// The full schema document: an ordered property map plus the required set.
///
/// Property order is insertion order and survives rendering; the `required`
/// key is omitted from output entirely when the set is empty, so strict
/// JSON-Schema consumers never see `required: []`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    properties: Vec<(String, PropertySchema)>,
    required: Vec<String>,
}

impl SchemaDocument {
    /// Create an empty document (`{"type":"object","properties":{}}`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, keeping insertion order.
    ///
    /// A duplicate key overwrites the existing definition in place (last
    /// write wins, original position kept) and returns `true` so the caller
    /// can log the collision.
    pub fn insert(&mut self, key: impl Into<String>, prop: PropertySchema) -> bool {
        let key = key.into();
        if let Some(entry) = self.properties.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = prop;
            return true;
        }
        self.properties.push((key, prop));
        false
    }

    /// Add a key to the required set (deduplicated).
    pub fn mark_required(&mut self, key: &str) {
        if !self.required.iter().any(|k| k == key) {
            self.required.push(key.to_string());
        }
    }

    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&PropertySchema> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    /// Iterate properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.properties.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// The required key set, in emission order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the document has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the document as a `serde_json::Value`.
    pub fn to_value(&self) -> Value {
        let mut properties = Map::new();
        for (key, prop) in &self.properties {
            properties.insert(key.clone(), prop.to_value());
        }

        let mut root = Map::new();
        root.insert("type".into(), Value::String("object".into()));
        root.insert("properties".into(), Value::Object(properties));
        if !self.required.is_empty() {
            root.insert(
                "required".into(),
                Value::Array(self.required.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(root)
    }

    /// Render the document as indented JSON text for the surrounding form's
    /// schema slot.
    pub fn to_json_string(&self) -> String {
        // Serializing a Value built from string keys cannot fail.
        serde_json::to_string_pretty(&self.to_value()).unwrap_or_default()
    }
}
