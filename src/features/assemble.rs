//! Raw inputs -> feature record.
//!
//! Numeric inputs are copied as-is (ranges belong to the input collector).
//! The education level goes through the ordinal table. Every categorical
//! input goes through the safe normalizer keyed by its own column, so the
//! record can only ever contain labels the model was trained on.

use crate::domain::{FIELD_SCHEMA, FeatureValue, FieldKind, RawInputs};
use crate::features::record::{FeatureRecord, FeatureSlot};
use crate::registry::normalize;

/// Build the feature record for one prediction request.
pub fn assemble(raw: &RawInputs) -> FeatureRecord {
    let slots = FIELD_SCHEMA
        .iter()
        .map(|kind| FeatureSlot {
            name: kind.name(),
            value: slot_value(raw, *kind),
        })
        .collect();
    FeatureRecord::from_slots(slots)
}

fn slot_value(raw: &RawInputs, kind: FieldKind) -> FeatureValue {
    match kind {
        FieldKind::Numeric(field) => FeatureValue::Int(raw.numeric(field)),
        FieldKind::Ordinal => FeatureValue::Int(i64::from(raw.education_level.rank())),
        FieldKind::Categorical(field) => FeatureValue::Label(normalize(raw.categorical(field), field)),
    }
}
