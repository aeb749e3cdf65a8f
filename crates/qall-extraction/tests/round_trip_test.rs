//! Round-trip and output-shape properties of the synthesizer/parser pair.

use qall_core::{ExtractionField, FieldType};
use qall_extraction::{parse_schema, synthesize};
use serde_json::Value;

#[test]
fn round_trip_preserves_scalar_fields() {
    let fields = vec![
        ExtractionField::new("Customer Name", FieldType::String)
            .with_description("The caller's full name")
            .with_required(true),
        ExtractionField::new("Budget", FieldType::Number)
            .with_description("Stated budget in dollars"),
        ExtractionField::new("Callback Requested", FieldType::Boolean)
            .with_description("Whether the caller asked to be called back")
            .with_required(true),
    ];

    let json = synthesize(&fields).to_json_string();
    let reconstructed = parse_schema(&json).unwrap();

    assert_eq!(reconstructed.len(), fields.len());
    for (original, parsed) in fields.iter().zip(&reconstructed) {
        assert_eq!(parsed.field_type, original.field_type);
        assert_eq!(parsed.description, original.description);
        assert_eq!(parsed.required, original.required);
    }
    // Title-case names with no acronyms come back unchanged
    assert_eq!(reconstructed[0].name, "Customer Name");
    assert_eq!(reconstructed[1].name, "Budget");
}

#[test]
fn round_trip_loses_acronym_capitalization() {
    // Accepted asymmetry, not a bug: slugs cannot preserve capitalization
    // beyond the first letter of each word.
    let fields = vec![ExtractionField::new("API Key", FieldType::String)
        .with_description("The API key the caller read out")];
    let json = synthesize(&fields).to_json_string();
    let reconstructed = parse_schema(&json).unwrap();
    assert_eq!(reconstructed[0].name, "Api Key");
}

#[test]
fn round_trip_preserves_enum_and_array_fields() {
    let fields = vec![
        ExtractionField::new("Priority", FieldType::Enum)
            .with_description("Urgency of the request")
            .with_enum_values(vec!["Low".into(), "High".into()])
            .with_required(true),
        ExtractionField::new("Product Mentions", FieldType::Array)
            .with_description("Products the caller brought up"),
    ];

    let json = synthesize(&fields).to_json_string();
    let reconstructed = parse_schema(&json).unwrap();

    assert_eq!(reconstructed.len(), 2);
    assert_eq!(reconstructed[0].field_type, FieldType::Enum);
    assert_eq!(reconstructed[0].enum_values, vec!["Low", "High"]);
    assert!(reconstructed[0].required);
    assert_eq!(reconstructed[1].field_type, FieldType::Array);
    assert!(!reconstructed[1].required);
}

#[test]
fn round_trip_ids_are_fresh_not_preserved() {
    let fields = vec![ExtractionField::new("Budget", FieldType::Number)
        .with_description("Stated budget")];
    let json = synthesize(&fields).to_json_string();
    let reconstructed = parse_schema(&json).unwrap();
    assert_ne!(reconstructed[0].id, fields[0].id);
}

#[test]
fn synthesis_is_idempotent_byte_for_byte() {
    let fields = vec![
        ExtractionField::new("Customer Name", FieldType::String).with_required(true),
        ExtractionField::new("Priority", FieldType::Enum)
            .with_enum_values(vec!["Low".into(), "Medium".into(), "High".into()]),
        ExtractionField::new("Tags", FieldType::Array),
    ];
    let first = synthesize(&fields).to_json_string();
    let second = synthesize(&fields).to_json_string();
    assert_eq!(first, second);
}

#[test]
fn required_key_absent_when_no_field_is_required() {
    let fields = vec![
        ExtractionField::new("Notes", FieldType::String),
        ExtractionField::new("Count", FieldType::Number),
    ];
    let value = synthesize(&fields).to_value();
    assert!(value.get("required").is_none());
    assert!(!synthesize(&fields).to_json_string().contains("required"));
}

#[test]
fn required_key_absent_when_all_required_fields_were_dropped() {
    let fields = vec![
        ExtractionField::new("", FieldType::String).with_required(true),
        ExtractionField::new("Priority", FieldType::Enum)
            .with_enum_values(vec!["  ".into()])
            .with_required(true),
    ];
    let value = synthesize(&fields).to_value();
    assert!(value.get("required").is_none());
    assert_eq!(value["properties"], serde_json::json!({}));
}

#[test]
fn empty_and_whitespace_input_tolerated() {
    assert!(parse_schema("").unwrap().is_empty());
    assert!(parse_schema("   ").unwrap().is_empty());
}

#[test]
fn basic_scenario_document_shape() {
    let fields = vec![ExtractionField::new("Customer Name", FieldType::String).with_required(true)];
    let expected: Value = serde_json::from_str(
        r#"{"type":"object","properties":{"customer_name":{"type":"string","description":"The customer name from the conversation"}},"required":["customer_name"]}"#,
    )
    .unwrap();
    assert_eq!(synthesize(&fields).to_value(), expected);
}

#[test]
fn duplicate_slugs_collide_last_write_wins() {
    let fields = vec![
        ExtractionField::new("Customer Email", FieldType::String),
        ExtractionField::new("Customer  Email!!", FieldType::Boolean),
    ];
    let doc = synthesize(&fields);
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.get("customer_email").unwrap().field_type(),
        FieldType::Boolean
    );
}
