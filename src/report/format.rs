//! Formatted terminal output.
//!
//! We keep formatting code in one place so the CLI and the form render
//! predictions, failures and schema listings identically.

use crate::app::pipeline::PredictionOutcome;
use crate::domain::{FIELD_SCHEMA, FieldKind};
use crate::error::PredictionError;
use crate::features::FeatureRecord;
use crate::registry::EducationLevel;

/// Render a prediction value: class labels without decimals, scores with four.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}

/// The one-line success message.
pub fn format_outcome(outcome: &PredictionOutcome) -> String {
    format!("Predicted Performance: {}", format_value(outcome.value))
}

/// The one-line failure message.
pub fn format_failure(err: &PredictionError) -> String {
    format!("Error making prediction: {err}")
}

/// Two-column listing of an assembled record, in schema order.
pub fn format_record(record: &FeatureRecord) -> String {
    let width = record.columns().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for slot in record.slots() {
        out.push_str(&format!("{:<width$}  {}\n", slot.name, slot.value));
    }
    out
}

/// The feature schema with ranges and vocabularies.
pub fn format_schema() -> String {
    let mut out = String::new();
    out.push_str("=== Feature schema (model column order) ===\n");
    for (i, kind) in FIELD_SCHEMA.iter().enumerate() {
        let detail = match kind {
            FieldKind::Numeric(field) => {
                let r = field.range();
                format!("integer {}..={} (default {})", r.min, r.max, field.default_value())
            }
            FieldKind::Ordinal => {
                let levels: Vec<String> = EducationLevel::ALL
                    .iter()
                    .map(|l| format!("{}={}", l.label(), l.rank()))
                    .collect();
                format!("ordinal [{}]", levels.join(", "))
            }
            FieldKind::Categorical(field) => {
                format!(
                    "one of [{}] (fallback {})",
                    field.labels().join(", "),
                    field.fallback()
                )
            }
        };
        out.push_str(&format!("{:>2}. {:<29} {detail}\n", i + 1, kind.name()));
    }
    out
}
