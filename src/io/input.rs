//! Raw-input JSON reader for one-shot predictions.
//!
//! This is an input-collection boundary, so it enforces what the form enforces
//! by construction: every numeric field must lie inside its inclusive range.
//! Categorical values are left alone (the assembler normalizes them), and the
//! education level must be one of its five labels (checked by deserialization).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::{NumericField, RawInputs};
use crate::error::AppError;

/// Read raw inputs from a JSON file, or from stdin when `path` is `None`.
pub fn read_raw_inputs(path: Option<&Path>) -> Result<RawInputs, AppError> {
    let raw = match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                AppError::new(2, format!("Failed to open input JSON '{}': {e}", path.display()))
            })?;
            parse_raw_inputs(BufReader::new(file))?
        }
        None => parse_raw_inputs(std::io::stdin().lock())?,
    };
    validate_ranges(&raw)?;
    Ok(raw)
}

pub fn parse_raw_inputs(reader: impl Read) -> Result<RawInputs, AppError> {
    serde_json::from_reader(reader).map_err(|e| AppError::new(2, format!("Invalid input JSON: {e}")))
}

/// Reject the first numeric field outside its range.
pub fn validate_ranges(raw: &RawInputs) -> Result<(), AppError> {
    for field in NumericField::ALL {
        let value = raw.numeric(field);
        let range = field.range();
        if !range.contains(value) {
            return Err(AppError::new(
                2,
                format!(
                    "{} = {value} is outside the allowed range {}..={}",
                    field.name(),
                    range.min,
                    range.max
                ),
            ));
        }
    }
    Ok(())
}
