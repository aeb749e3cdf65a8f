//! Schema document → Field Model reconstruction.
//!
//! The inverse of synthesis, on a best-effort basis: schemas can originate
//! from hand-edited text or from the backend, so parsing tolerates anything
//! structurally close to the expected grammar and silently skips entries it
//! cannot represent. Only outright syntax failures and non-object roots are
//! reported as errors.

use serde_json::Value;
use tracing::{debug, trace};

use qall_core::{humanize, Error, ExtractionField, Result};

use crate::schema::PropertySchema;

/// Parse schema text into an ordered field list.
///
/// Blank input is treated as the empty schema and yields an empty list.
/// Syntax failures return [`Error::InvalidJson`] with the parser's message;
/// a root that is not a plain object returns [`Error::NotAnObject`]. The
/// caller's state is never touched on failure.
///
/// Reconstructed field names are humanized from the property keys and are
/// not guaranteed to match the names that produced them ("API Key" comes
/// back as "Api Key"). Every field gets a fresh id.
pub fn parse_schema(input: &str) -> Result<Vec<ExtractionField>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(input).map_err(|e| Error::InvalidJson(e.to_string()))?;
    let root = value.as_object().ok_or(Error::NotAnObject)?;

    let empty = serde_json::Map::new();
    let properties = root
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let required: Vec<&str> = root
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut fields = Vec::new();
    for (key, def) in properties {
        let Some(prop) = PropertySchema::classify(def) else {
            trace!(property_key = %key, "skipping non-object property definition");
            continue;
        };

        let mut field = ExtractionField::new(humanize(key), prop.field_type());
        field.description = prop.description().to_string();
        field.required = required.contains(&key.as_str());
        if let PropertySchema::Enum { values, .. } = prop {
            // Empty casts keep the placeholder seed from the constructor.
            if !values.is_empty() {
                field.enum_values = values;
            }
        }
        fields.push(field);
    }

    debug!(field_count = fields.len(), "parsed schema document");
    Ok(fields)
}
