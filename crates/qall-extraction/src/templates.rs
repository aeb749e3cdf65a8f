//! Canned extraction-field presets.
//!
//! Each template is a fixed, ordered field list covering a common call
//! scenario. Loading one replaces the whole Field Model; every
//! materialization generates fresh field ids so loaded fields behave like
//! fields the operator created by hand.

use tracing::debug;

use qall_core::{Error, ExtractionField, FieldType};

/// The four built-in template presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Sales call: lead qualification.
    Sales,
    /// Support call: issue intake.
    Support,
    /// Booking call: appointment capture.
    Booking,
    /// Feedback call: satisfaction survey.
    Feedback,
}

impl TemplateKind {
    /// All templates, in display order.
    pub fn all() -> [TemplateKind; 4] {
        [Self::Sales, Self::Support, Self::Booking, Self::Feedback]
    }

    /// Materialize the preset field list with freshly generated ids.
    pub fn fields(&self) -> Vec<ExtractionField> {
        let fields: Vec<ExtractionField> = self
            .preset()
            .iter()
            .map(|preset| {
                ExtractionField::new(preset.name, preset.field_type)
                    .with_description(preset.description)
                    .with_required(preset.required)
                    .with_enum_values(
                        preset.options.iter().map(|o| o.to_string()).collect(),
                    )
            })
            .collect();
        debug!(template = %self, field_count = fields.len(), "materialized template");
        fields
    }

    fn preset(&self) -> &'static [TemplateField] {
        match self {
            Self::Sales => SALES,
            Self::Support => SUPPORT,
            Self::Booking => BOOKING,
            Self::Feedback => FEEDBACK,
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sales => write!(f, "sales"),
            Self::Support => write!(f, "support"),
            Self::Booking => write!(f, "booking"),
            Self::Feedback => write!(f, "feedback"),
        }
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(Self::Sales),
            "support" => Ok(Self::Support),
            "booking" => Ok(Self::Booking),
            "feedback" => Ok(Self::Feedback),
            _ => Err(Error::InvalidInput(format!("Unknown template: {}", s))),
        }
    }
}

struct TemplateField {
    name: &'static str,
    field_type: FieldType,
    description: &'static str,
    required: bool,
    options: &'static [&'static str],
}

const SALES: &[TemplateField] = &[
    TemplateField {
        name: "Lead Name",
        field_type: FieldType::String,
        description: "The prospect's full name",
        required: true,
        options: &[],
    },
    TemplateField {
        name: "Company",
        field_type: FieldType::String,
        description: "The company the prospect works for",
        required: false,
        options: &[],
    },
    TemplateField {
        name: "Interest Level",
        field_type: FieldType::Enum,
        description: "How interested the prospect sounded in the offering",
        required: true,
        options: &["High", "Medium", "Low"],
    },
    TemplateField {
        name: "Follow Up Needed",
        field_type: FieldType::Boolean,
        description: "Whether the prospect asked for a follow-up call",
        required: false,
        options: &[],
    },
];

const SUPPORT: &[TemplateField] = &[
    TemplateField {
        name: "Customer Name",
        field_type: FieldType::String,
        description: "The caller's full name",
        required: true,
        options: &[],
    },
    TemplateField {
        name: "Issue Category",
        field_type: FieldType::Enum,
        description: "The kind of problem the caller reported",
        required: true,
        options: &["Billing", "Technical", "Account", "Other"],
    },
    TemplateField {
        name: "Issue Summary",
        field_type: FieldType::String,
        description: "A one-sentence summary of the reported problem",
        required: true,
        options: &[],
    },
    TemplateField {
        name: "Urgency",
        field_type: FieldType::Enum,
        description: "How urgent the caller considered the issue",
        required: false,
        options: &["Low", "Medium", "High", "Critical"],
    },
    TemplateField {
        name: "Resolved On Call",
        field_type: FieldType::Boolean,
        description: "Whether the issue was resolved before hanging up",
        required: false,
        options: &[],
    },
];

const BOOKING: &[TemplateField] = &[
    TemplateField {
        name: "Customer Name",
        field_type: FieldType::String,
        description: "The caller's full name",
        required: true,
        options: &[],
    },
    TemplateField {
        name: "Service Requested",
        field_type: FieldType::String,
        description: "The service the caller wants to book",
        required: true,
        options: &[],
    },
    TemplateField {
        name: "Preferred Date",
        field_type: FieldType::String,
        description: "The caller's preferred appointment date",
        required: true,
        options: &[],
    },
    TemplateField {
        name: "Preferred Time",
        field_type: FieldType::Enum,
        description: "The caller's preferred time of day",
        required: false,
        options: &["Morning", "Afternoon", "Evening"],
    },
    TemplateField {
        name: "Confirmed",
        field_type: FieldType::Boolean,
        description: "Whether the appointment was confirmed during the call",
        required: false,
        options: &[],
    },
];

const FEEDBACK: &[TemplateField] = &[
    TemplateField {
        name: "Customer Name",
        field_type: FieldType::String,
        description: "The caller's full name",
        required: false,
        options: &[],
    },
    TemplateField {
        name: "Satisfaction",
        field_type: FieldType::Enum,
        description: "Overall satisfaction expressed by the caller",
        required: true,
        options: &["Very Satisfied", "Satisfied", "Neutral", "Dissatisfied"],
    },
    TemplateField {
        name: "Liked Most",
        field_type: FieldType::String,
        description: "What the caller said they liked most",
        required: false,
        options: &[],
    },
    TemplateField {
        name: "Would Recommend",
        field_type: FieldType::Boolean,
        description: "Whether the caller would recommend the service",
        required: true,
        options: &[],
    },
];
