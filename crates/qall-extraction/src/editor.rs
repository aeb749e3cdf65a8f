//! The dual-mode schema editor.
//!
//! Coordinates the two mutually exclusive editing surfaces: the visual
//! builder (field list authoritative) and the raw JSON text editor (text
//! authoritative). Exactly one representation is the source of truth at any
//! instant, selected by the mode flag; synchronization happens only at the
//! explicit points below, never as a background merge.
//!
//! Transitions:
//! - builder → json: unconditional (the builder is always representable as
//!   valid JSON by construction).
//! - json → builder: only through [`SchemaEditor::apply_json`], gated on a
//!   successful parse.
//!
//! While in builder mode every field mutation re-synthesizes the document
//! and overwrites the JSON slot. While in json mode every text update is
//! re-validated (parse-only) for the live status indicator but never
//! applied to the field list.

use tracing::{debug, info};
use uuid::Uuid;

use qall_core::{Error, ExtractionField, FieldPatch, Result};

use crate::parse::parse_schema;
use crate::synthesize::synthesize;
use crate::templates::TemplateKind;

// =============================================================================
// MODE AND STATUS
// =============================================================================

/// Which editing surface currently owns the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// The visual field list is authoritative.
    #[default]
    Builder,
    /// The raw JSON text is authoritative.
    Json,
}

impl std::fmt::Display for EditorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builder => write!(f, "builder"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Live validation state of the JSON text, shown as the "Valid / Invalid
/// JSON" indicator while in json mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonStatus {
    Valid,
    Invalid { message: String },
}

impl JsonStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Caller-imposed editor limits.
#[derive(Debug, Clone, Default)]
pub struct EditorOptions {
    /// Maximum number of fields [`SchemaEditor::add_field`] will accept.
    /// `None` (the default) leaves the count unbounded.
    pub max_fields: Option<usize>,
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the field count (builder style).
    pub fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = Some(max_fields);
        self
    }
}

// =============================================================================
// EDITOR
// =============================================================================

/// The dual-mode editor instance.
///
/// Owns the Field Model, the schema JSON text slot, and the sibling
/// structured-data prompt slot. The prompt is an opaque passthrough: the
/// editor stores and returns it without validation.
#[derive(Debug, Clone, Default)]
pub struct SchemaEditor {
    mode: EditorMode,
    fields: Vec<ExtractionField>,
    schema_json: String,
    prompt: String,
    options: EditorOptions,
}

impl SchemaEditor {
    /// Create an empty editor in builder mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty editor with the given limits.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Seed the editor from the surrounding form's two string slots.
    ///
    /// Re-initializes the Field Model by parsing the schema text. On
    /// failure the existing in-memory field list is left untouched and the
    /// error is returned; the raw text is kept in the JSON slot either way
    /// so the operator can inspect and fix it.
    pub fn open(
        &mut self,
        schema_json: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<()> {
        let text = schema_json.into();
        self.prompt = prompt.into();
        self.mode = EditorMode::Builder;

        match parse_schema(&text) {
            Ok(fields) => {
                info!(field_count = fields.len(), "opened schema editor");
                self.fields = fields;
                self.schema_json = text;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "schema text rejected on open, keeping builder state");
                self.schema_json = text;
                Err(e)
            }
        }
    }

    // =========================================================================
    // FIELD MODEL OPERATIONS (builder mode)
    // =========================================================================

    /// Append a new field built from the preset; unset preset members take
    /// the blank-field defaults (string type, optional, no description).
    ///
    /// Returns the new field's id. Fails only when a configured
    /// `max_fields` limit is already reached.
    pub fn add_field(&mut self, preset: FieldPatch) -> Result<Uuid> {
        if let Some(max) = self.options.max_fields {
            if self.fields.len() >= max {
                return Err(Error::InvalidInput(format!(
                    "Field limit of {} reached",
                    max
                )));
            }
        }
        let mut field = ExtractionField::blank();
        field.apply(preset);
        let id = field.id;
        self.fields.push(field);
        self.resync();
        Ok(id)
    }

    /// Remove the field with the given id. No-op for unknown ids.
    pub fn remove_field(&mut self, id: Uuid) {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != id);
        if self.fields.len() != before {
            self.resync();
        }
    }

    /// Merge a patch into the field with the given id, enforcing the enum
    /// option invariant against the patched type. No-op for unknown ids.
    pub fn update_field(&mut self, id: Uuid, patch: FieldPatch) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.id == id) {
            field.apply(patch);
            self.resync();
        }
    }

    /// Remove every field.
    pub fn clear_all(&mut self) {
        self.fields.clear();
        self.resync();
    }

    /// Replace the whole field list with a template preset and force
    /// builder mode so the loaded fields are visible and re-synthesized.
    pub fn load_template(&mut self, kind: TemplateKind) {
        info!(template = %kind, "loading template");
        self.fields = kind.fields();
        self.mode = EditorMode::Builder;
        self.resync();
    }

    // =========================================================================
    // MODE TRANSITIONS
    // =========================================================================

    /// Switch to json mode. Unconditional; the JSON slot is shown as-is
    /// (last synthesized or previously hand-edited), no transformation.
    pub fn switch_to_json(&mut self) {
        if self.mode != EditorMode::Json {
            debug!(mode = %EditorMode::Json, "mode transition");
            self.mode = EditorMode::Json;
        }
    }

    /// Overwrite the JSON slot from the text editor (keystroke path).
    ///
    /// Only meaningful in json mode; ignored in builder mode, where the
    /// field list is authoritative and would overwrite the slot on the next
    /// mutation anyway. The text is never applied to the field list here;
    /// validation feedback comes from [`Self::json_status`].
    pub fn set_json_text(&mut self, text: impl Into<String>) {
        if self.mode != EditorMode::Json {
            debug!("ignoring json text update while builder is authoritative");
            return;
        }
        self.schema_json = text.into();
    }

    /// Apply the JSON text to the builder: the single gated transition.
    ///
    /// On success the Field Model is replaced wholesale, the mode switches
    /// to builder, and the slot is re-synthesized (normalizing the text).
    /// On failure the editor stays in json mode with the field list
    /// untouched.
    pub fn apply_json(&mut self) -> Result<()> {
        match parse_schema(&self.schema_json) {
            Ok(fields) => {
                debug!(field_count = fields.len(), "applied json to builder");
                self.fields = fields;
                self.mode = EditorMode::Builder;
                self.resync();
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "apply rejected, staying in json mode");
                Err(e)
            }
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn fields(&self) -> &[ExtractionField] {
        &self.fields
    }

    /// Look up a field by id.
    pub fn field(&self, id: Uuid) -> Option<&ExtractionField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The schema JSON text slot handed to the surrounding form.
    pub fn schema_json(&self) -> &str {
        &self.schema_json
    }

    /// Live validation state of the JSON slot (parse-only, no side effects).
    pub fn json_status(&self) -> JsonStatus {
        match parse_schema(&self.schema_json) {
            Ok(_) => JsonStatus::Valid,
            Err(e) => JsonStatus::Invalid {
                message: e.to_string(),
            },
        }
    }

    /// The opaque structured-data prompt slot.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Overwrite the prompt slot. Passed through untouched, no validation.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Re-synthesize the JSON slot from the field list while the builder is
    /// authoritative. The mode gate is what makes builder → json sync
    /// one-way and continuous.
    fn resync(&mut self) {
        if self.mode == EditorMode::Builder {
            self.schema_json = synthesize(&self.fields).to_json_string();
        }
    }
}
