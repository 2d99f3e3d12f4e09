//! Prediction side of the pipeline.
//!
//! The rest of the crate only depends on the [`Predictor`] trait; the model
//! format behind it is an implementation detail of [`PipelineModel`].
//!
//! - artifact schema + structural validation (`artifact`)
//! - passthrough/one-hot column transform (`encoder`)
//! - tree-ensemble scoring (`ensemble`)
//! - the loaded model tying them together (`model`)

pub mod artifact;
pub mod encoder;
pub mod ensemble;
pub mod model;

pub use artifact::{ModelArtifact, Objective};
pub use model::PipelineModel;

use crate::error::PredictionError;
use crate::features::FeatureRecord;

/// Anything that turns a feature record into a scalar prediction.
pub trait Predictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError>;
}

#[cfg(test)]
pub(crate) mod testing {
    /// The artifact shipped under `models/`, used as a realistic fixture.
    pub fn performance_artifact_json() -> String {
        include_str!("../../models/performance_pipeline.json").to_string()
    }
}
