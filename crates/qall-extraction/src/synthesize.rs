//! Field Model → schema document synthesis.
//!
//! Pure and deterministic: identical field lists always produce identical
//! (byte-identical when rendered) documents. Incomplete fields are skipped
//! silently rather than reported, since the builder is edited incrementally
//! and a half-finished field is not an error state.

use tracing::{debug, trace, warn};

use qall_core::{slugify, ExtractionField, FieldType};

use crate::schema::{PropertySchema, SchemaDocument};

/// Synthesize the schema document for an ordered field list.
///
/// Skipped (silently): fields with blank names, fields whose slugified key
/// is empty, and enum fields with no non-blank options. A field's `required`
/// flag only contributes its key when the field was actually emitted.
///
/// Duplicate slugified keys collide last-write-wins, matching the form
/// behavior operators already rely on; the overwrite is surfaced in the log
/// rather than as an error.
pub fn synthesize(fields: &[ExtractionField]) -> SchemaDocument {
    let mut doc = SchemaDocument::new();

    for field in fields {
        if field.name.trim().is_empty() {
            trace!(field_id = %field.id, "skipping unnamed field");
            continue;
        }
        let key = slugify(&field.name);
        if key.is_empty() {
            trace!(field_id = %field.id, name = %field.name, "skipping field with empty slug");
            continue;
        }

        let prop = match field.field_type {
            FieldType::Enum => {
                let values: Vec<String> = field
                    .enum_values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_string())
                    .collect();
                if values.is_empty() {
                    trace!(field_id = %field.id, property_key = %key, "skipping enum field with no options");
                    continue;
                }
                let description = effective_description(field, &values);
                PropertySchema::Enum {
                    values,
                    description,
                }
            }
            FieldType::Array => PropertySchema::Array {
                description: effective_description(field, &[]),
            },
            FieldType::Number => PropertySchema::Number {
                description: effective_description(field, &[]),
            },
            FieldType::Boolean => PropertySchema::Boolean {
                description: effective_description(field, &[]),
            },
            FieldType::String => PropertySchema::String {
                description: effective_description(field, &[]),
            },
        };

        if doc.insert(key.clone(), prop) {
            warn!(property_key = %key, field_id = %field.id, "duplicate property key, last write wins");
        }
        if field.required {
            doc.mark_required(&key);
        }
    }

    debug!(
        field_count = fields.len(),
        property_count = doc.len(),
        "synthesized schema document"
    );
    doc
}

/// The field's own description, or a fabricated default when blank.
fn effective_description(field: &ExtractionField, enum_values: &[String]) -> String {
    if !field.description.trim().is_empty() {
        return field.description.clone();
    }
    let lowered = field.name.trim().to_lowercase();
    match field.field_type {
        FieldType::Enum => format!(
            "The {} from the conversation (one of: {})",
            lowered,
            enum_values.join(", ")
        ),
        FieldType::Array => format!("A list of {} items from the conversation", lowered),
        _ => format!("The {} from the conversation", lowered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qall_core::FieldPatch;
    use serde_json::json;

    fn named(name: &str, field_type: FieldType) -> ExtractionField {
        ExtractionField::new(name, field_type)
    }

    #[test]
    fn test_basic_round_trip_scenario() {
        let fields = vec![named("Customer Name", FieldType::String).with_required(true)];
        let doc = synthesize(&fields);
        assert_eq!(
            doc.to_value(),
            json!({
                "type": "object",
                "properties": {
                    "customer_name": {
                        "type": "string",
                        "description": "The customer name from the conversation"
                    }
                },
                "required": ["customer_name"]
            })
        );
    }

    #[test]
    fn test_blank_named_field_skipped() {
        let fields = vec![
            named("  ", FieldType::String),
            named("Kept", FieldType::String),
        ];
        let doc = synthesize(&fields);
        assert_eq!(doc.len(), 1);
        assert!(doc.get("kept").is_some());
    }

    #[test]
    fn test_empty_slug_field_skipped() {
        let fields = vec![named("???", FieldType::String).with_required(true)];
        let doc = synthesize(&fields);
        assert!(doc.is_empty());
        assert!(doc.required().is_empty());
    }

    #[test]
    fn test_enum_with_blank_options_dropped() {
        let field = named("Priority", FieldType::Enum)
            .with_enum_values(vec!["  ".into(), "".into()]);
        let doc = synthesize(&[field]);
        assert_eq!(doc.to_value(), json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_enum_options_trimmed_and_filtered() {
        let field = named("Priority", FieldType::Enum)
            .with_enum_values(vec![" Low ".into(), "".into(), "High".into()]);
        let doc = synthesize(&[field]);
        assert_eq!(
            doc.get("priority"),
            Some(&PropertySchema::Enum {
                values: vec!["Low".into(), "High".into()],
                description: "The priority from the conversation (one of: Low, High)".into()
            })
        );
    }

    #[test]
    fn test_array_field_scenario() {
        let fields = vec![named("Product Mentions", FieldType::Array)];
        let doc = synthesize(&fields);
        assert_eq!(
            doc.get("product_mentions").unwrap().to_value(),
            json!({
                "type": "array",
                "items": {"type": "string"},
                "description": "A list of product mentions items from the conversation"
            })
        );
    }

    #[test]
    fn test_own_description_taken_verbatim() {
        let fields =
            vec![named("Budget", FieldType::Number).with_description("Stated budget in dollars")];
        let doc = synthesize(&fields);
        assert_eq!(
            doc.get("budget").unwrap().description(),
            "Stated budget in dollars"
        );
    }

    #[test]
    fn test_whitespace_description_replaced_by_default() {
        let fields = vec![named("Budget", FieldType::Number).with_description("   ")];
        let doc = synthesize(&fields);
        assert_eq!(
            doc.get("budget").unwrap().description(),
            "The budget from the conversation"
        );
    }

    #[test]
    fn test_required_only_for_emitted_fields() {
        let fields = vec![
            named("", FieldType::String).with_required(true),
            named("Priority", FieldType::Enum)
                .with_enum_values(vec!["".into()])
                .with_required(true),
            named("Kept", FieldType::String).with_required(true),
        ];
        let doc = synthesize(&fields);
        assert_eq!(doc.required(), &["kept".to_string()]);
    }

    #[test]
    fn test_required_omitted_when_no_required_fields() {
        let fields = vec![named("Optional Thing", FieldType::String)];
        let value = synthesize(&fields).to_value();
        assert!(value.get("required").is_none());
    }

    #[test]
    fn test_property_order_matches_field_order() {
        let fields = vec![
            named("Zeta", FieldType::String),
            named("Alpha", FieldType::Boolean),
            named("Mid Point", FieldType::Number),
        ];
        let doc = synthesize(&fields);
        let keys: Vec<&str> = doc.properties().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid_point"]);
    }

    #[test]
    fn test_slug_collision_last_write_wins() {
        let fields = vec![
            named("Customer Email", FieldType::String).with_required(true),
            named("Customer  Email!!", FieldType::Number),
        ];
        let doc = synthesize(&fields);
        assert_eq!(doc.len(), 1);
        // Second definition wins; the first field's required mark remains.
        assert_eq!(
            doc.get("customer_email").unwrap().field_type(),
            FieldType::Number
        );
        assert_eq!(doc.required(), &["customer_email".to_string()]);
    }

    #[test]
    fn test_synthesis_idempotent() {
        let mut field = named("Priority", FieldType::String);
        field.apply(
            FieldPatch::new()
                .with_type(FieldType::Enum)
                .with_required(true),
        );
        let fields = vec![field, named("Notes", FieldType::Array)];
        let first = synthesize(&fields).to_json_string();
        let second = synthesize(&fields).to_json_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_field_list_yields_empty_document() {
        let doc = synthesize(&[]);
        assert_eq!(doc.to_value(), json!({"type": "object", "properties": {}}));
    }
}
