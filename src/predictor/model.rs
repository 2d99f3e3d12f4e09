//! Artifact-backed predictor.

use std::path::Path;

use crate::error::PredictionError;
use crate::features::FeatureRecord;
use crate::predictor::Predictor;
use crate::predictor::artifact::{ModelArtifact, Objective};
use crate::predictor::encoder::EncoderLayout;
use crate::predictor::ensemble::score;

/// A loaded, validated model: encoder layout + tree ensemble.
///
/// Loaded once at startup and shared read-only for the rest of the process.
#[derive(Debug, Clone)]
pub struct PipelineModel {
    artifact: ModelArtifact,
    layout: EncoderLayout,
}

impl PipelineModel {
    pub fn load(path: &Path) -> Result<Self, PredictionError> {
        let artifact = ModelArtifact::read(path)?;
        let model = Self::from_artifact(artifact)?;
        tracing::info!(
            path = %path.display(),
            model = %model.describe(),
            "loaded model artifact"
        );
        Ok(model)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, PredictionError> {
        let layout = EncoderLayout::from_artifact(&artifact);
        artifact.validate(layout.width())?;
        Ok(Self { artifact, layout })
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// One-line summary for logs and the form header.
    pub fn describe(&self) -> String {
        let objective = match &self.artifact.objective {
            Objective::Regression => "regression".to_string(),
            Objective::Multiclass { classes } => format!("{}-class", classes.len()),
        };
        let trained = self
            .artifact
            .trained_on
            .map(|d| format!(", trained {d}"))
            .unwrap_or_default();
        format!(
            "{} v{} ({objective}, {} trees{trained})",
            self.artifact.name,
            self.artifact.format_version,
            self.artifact.trees.len()
        )
    }
}

impl Predictor for PipelineModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let x = self.layout.encode(record)?;
        score(&self.artifact, &x)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::RawInputs;
    use crate::features::assemble;
    use crate::predictor::testing::performance_artifact_json;

    #[test]
    fn scores_an_assembled_record() {
        let model = PipelineModel::from_artifact(
            ModelArtifact::from_json_str(&performance_artifact_json()).unwrap(),
        )
        .unwrap();
        let record = assemble(&RawInputs::default());
        let value = model.predict(&record).unwrap();
        assert!([2.0, 3.0, 4.0].contains(&value), "got {value}");
    }

    #[test]
    fn overtime_and_satisfaction_move_the_prediction() {
        let model = PipelineModel::from_artifact(
            ModelArtifact::from_json_str(&performance_artifact_json()).unwrap(),
        )
        .unwrap();

        let mut low = RawInputs::default();
        low.environment_satisfaction = 1;
        low.overtime = "Yes".to_string();
        assert_eq!(model.predict(&assemble(&low)).unwrap(), 2.0);

        let mut high = RawInputs::default();
        high.environment_satisfaction = 4;
        high.overtime = "No".to_string();
        high.last_salary_hike_percent = 22;
        assert_eq!(model.predict(&assemble(&high)).unwrap(), 4.0);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(performance_artifact_json().as_bytes()).unwrap();

        let model = PipelineModel::load(file.path()).unwrap();
        assert_eq!(model.artifact().features.len(), 26);
        assert!(model.describe().starts_with("employee-performance v1 (3-class, 6 trees"));
    }

    #[test]
    fn invalid_artifacts_fail_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"format_version\": 1}").unwrap();
        let err = PipelineModel::load(file.path()).unwrap_err();
        assert!(matches!(err, PredictionError::Artifact(_)));
    }

    #[test]
    fn vocabulary_drift_surfaces_as_unknown_category() {
        // A model retrained without "HR" still gets a legal-by-registry record.
        let json = performance_artifact_json().replace(r#", "HR"]"#, "]");
        let model = PipelineModel::from_artifact(ModelArtifact::from_json_str(&json).unwrap()).unwrap();
        let mut raw = RawInputs::default();
        raw.department = "HR".to_string();
        let err = model.predict(&assemble(&raw)).unwrap_err();
        assert_eq!(
            err,
            PredictionError::UnknownCategory {
                column: "EmpDepartment".to_string(),
                value: "HR".to_string(),
            }
        );
    }
}
