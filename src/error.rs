use thiserror::Error;

/// Application-level failure carrying the process exit code.
///
/// Exit codes:
/// - `2`: input, usage or configuration problems (bad JSON, out-of-range field, unreadable model)
/// - `4`: prediction or terminal failures
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Any failure raised while loading the model or scoring a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("model artifact error: {0}")]
    Artifact(String),

    #[error("feature schema mismatch at column {index}: model expects '{expected}', record has '{actual}'")]
    SchemaMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("feature count mismatch: model expects {expected} columns, record has {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("found unknown category '{value}' in column '{column}' during transform")]
    UnknownCategory { column: String, value: String },

    #[error("incompatible value for column '{column}': expected {expected}")]
    IncompatibleType {
        column: String,
        expected: &'static str,
    },

    #[error("malformed model: {0}")]
    MalformedModel(String),

    #[error("model produced a non-finite score")]
    NonFinite,
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        let code = match err {
            PredictionError::Artifact(_) => 2,
            _ => 4,
        };
        AppError::new(code, format!("Error making prediction: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_errors_are_configuration_problems() {
        let err: AppError = PredictionError::Artifact("missing file".to_string()).into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("missing file"));
    }

    #[test]
    fn scoring_errors_map_to_prediction_exit_code() {
        let err: AppError = PredictionError::UnknownCategory {
            column: "Gender".to_string(),
            value: "Unknown".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(
            err.to_string(),
            "Error making prediction: found unknown category 'Unknown' in column 'Gender' during transform"
        );
    }
}
