//! Column transform applied before scoring.
//!
//! Mirrors a column transformer with a passthrough for numeric columns and a
//! strict one-hot encoder for categorical ones: numeric columns come first in
//! `features` order, then one block per categorical column. A label missing
//! from the encoder vocabulary is an error, which is exactly what the safe
//! normalizer upstream is there to prevent.

use crate::domain::FeatureValue;
use crate::error::PredictionError;
use crate::features::FeatureRecord;
use crate::predictor::artifact::ModelArtifact;

#[derive(Debug, Clone, PartialEq)]
enum ColumnEncoding {
    Passthrough { index: usize },
    OneHot { offset: usize, vocab: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncoderLayout {
    columns: Vec<(String, ColumnEncoding)>,
    width: usize,
}

impl EncoderLayout {
    pub fn from_artifact(artifact: &ModelArtifact) -> Self {
        let numeric_count = artifact
            .features
            .iter()
            .filter(|name| !artifact.is_categorical(name))
            .count();

        let mut next_numeric = 0;
        let mut next_offset = numeric_count;
        let mut columns = Vec::with_capacity(artifact.features.len());
        for name in &artifact.features {
            let encoding = match artifact.categories.get(name) {
                Some(vocab) => {
                    let enc = ColumnEncoding::OneHot {
                        offset: next_offset,
                        vocab: vocab.clone(),
                    };
                    next_offset += vocab.len();
                    enc
                }
                None => {
                    let enc = ColumnEncoding::Passthrough { index: next_numeric };
                    next_numeric += 1;
                    enc
                }
            };
            columns.push((name.clone(), encoding));
        }

        Self {
            columns,
            width: next_offset,
        }
    }

    /// Length of the encoded vector.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>, PredictionError> {
        if record.len() != self.columns.len() {
            return Err(PredictionError::ColumnCount {
                expected: self.columns.len(),
                actual: record.len(),
            });
        }

        let mut out = vec![0.0; self.width];
        for (index, (slot, (name, encoding))) in record.slots().iter().zip(&self.columns).enumerate() {
            if slot.name != name.as_str() {
                return Err(PredictionError::SchemaMismatch {
                    index,
                    expected: name.clone(),
                    actual: slot.name.to_string(),
                });
            }

            match (encoding, slot.value) {
                (ColumnEncoding::Passthrough { index: pos }, FeatureValue::Int(v)) => {
                    out[*pos] = v as f64;
                }
                (ColumnEncoding::OneHot { offset, vocab }, FeatureValue::Label(label)) => {
                    let pos = vocab.iter().position(|known| known == label).ok_or_else(|| {
                        PredictionError::UnknownCategory {
                            column: name.clone(),
                            value: label.to_string(),
                        }
                    })?;
                    out[offset + pos] = 1.0;
                }
                (ColumnEncoding::Passthrough { .. }, FeatureValue::Label(_)) => {
                    return Err(PredictionError::IncompatibleType {
                        column: name.clone(),
                        expected: "a number",
                    });
                }
                (ColumnEncoding::OneHot { .. }, FeatureValue::Int(_)) => {
                    return Err(PredictionError::IncompatibleType {
                        column: name.clone(),
                        expected: "a category label",
                    });
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::features::FeatureSlot;
    use crate::predictor::artifact::{Node, Objective, Tree};

    fn artifact(features: &[&str], categories: &[(&str, &[&str])]) -> ModelArtifact {
        ModelArtifact {
            format_version: 1,
            name: "enc".to_string(),
            trained_on: None,
            features: features.iter().map(|s| s.to_string()).collect(),
            categories: categories
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect::<BTreeMap<_, _>>(),
            objective: Objective::Regression,
            base_score: 0.0,
            trees: vec![Tree {
                nodes: vec![Node::Leaf(0.0)],
            }],
        }
    }

    fn record(slots: &[(&'static str, FeatureValue)]) -> FeatureRecord {
        FeatureRecord::from_slots(
            slots
                .iter()
                .map(|&(name, value)| FeatureSlot { name, value })
                .collect(),
        )
    }

    #[test]
    fn numeric_first_then_one_hot_blocks() {
        let layout = EncoderLayout::from_artifact(&artifact(
            &["Gender", "Age", "OverTime", "EmpJobLevel"],
            &[("Gender", &["Female", "Male"][..]), ("OverTime", &["No", "Yes"][..])],
        ));
        assert_eq!(layout.width(), 6);

        let x = layout
            .encode(&record(&[
                ("Gender", FeatureValue::Label("Male")),
                ("Age", FeatureValue::Int(30)),
                ("OverTime", FeatureValue::Label("No")),
                ("EmpJobLevel", FeatureValue::Int(2)),
            ]))
            .unwrap();
        assert_eq!(x, vec![30.0, 2.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_category_is_an_encoding_error() {
        let layout = EncoderLayout::from_artifact(&artifact(&["Gender"], &[("Gender", &["Female", "Male"][..])]));
        let err = layout
            .encode(&record(&[("Gender", FeatureValue::Label("Other"))]))
            .unwrap_err();
        assert_eq!(
            err,
            PredictionError::UnknownCategory {
                column: "Gender".to_string(),
                value: "Other".to_string(),
            }
        );
    }

    #[test]
    fn column_order_must_match() {
        let layout = EncoderLayout::from_artifact(&artifact(&["Age", "EmpJobLevel"], &[]));
        let err = layout
            .encode(&record(&[
                ("EmpJobLevel", FeatureValue::Int(2)),
                ("Age", FeatureValue::Int(30)),
            ]))
            .unwrap_err();
        assert!(matches!(err, PredictionError::SchemaMismatch { index: 0, .. }));
    }

    #[test]
    fn column_count_must_match() {
        let layout = EncoderLayout::from_artifact(&artifact(&["Age", "EmpJobLevel"], &[]));
        let err = layout
            .encode(&record(&[("Age", FeatureValue::Int(30))]))
            .unwrap_err();
        assert_eq!(
            err,
            PredictionError::ColumnCount {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn type_mismatches_are_reported_per_column() {
        let layout = EncoderLayout::from_artifact(&artifact(&["Age", "Gender"], &[("Gender", &["Male"][..])]));
        let err = layout
            .encode(&record(&[
                ("Age", FeatureValue::Label("thirty")),
                ("Gender", FeatureValue::Label("Male")),
            ]))
            .unwrap_err();
        assert!(matches!(err, PredictionError::IncompatibleType { ref column, .. } if column == "Age"));

        let err = layout
            .encode(&record(&[
                ("Age", FeatureValue::Int(30)),
                ("Gender", FeatureValue::Int(1)),
            ]))
            .unwrap_err();
        assert!(matches!(err, PredictionError::IncompatibleType { ref column, .. } if column == "Gender"));
    }
}
