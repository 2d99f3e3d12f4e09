//! Shared "predict once" logic used by both the CLI and the form front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw inputs -> feature record -> predictor -> outcome
//!
//! The front-ends then only decide how to present the outcome or the failure.

use chrono::{DateTime, Local};

use crate::domain::RawInputs;
use crate::error::PredictionError;
use crate::features::{FeatureRecord, assemble};
use crate::predictor::Predictor;

/// A successful prediction and the record it was made from.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub value: f64,
    pub record: FeatureRecord,
    pub predicted_at: DateTime<Local>,
}

/// Assemble the record and call the predictor exactly once.
///
/// Failures are returned to the caller, never retried; the predictor stays
/// usable for the next request.
pub fn run_prediction(
    predictor: &dyn Predictor,
    raw: &RawInputs,
) -> Result<PredictionOutcome, PredictionError> {
    let record = assemble(raw);
    tracing::debug!(columns = record.len(), "assembled feature record");

    match predictor.predict(&record) {
        Ok(value) => {
            tracing::info!(value, "prediction succeeded");
            Ok(PredictionOutcome {
                value,
                record,
                predicted_at: Local::now(),
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "prediction failed");
            Err(err)
        }
    }
}
