//! On-disk model artifact (JSON).
//!
//! The artifact bundles everything the scoring side needs:
//! - the column order the model was trained on (`features`)
//! - the one-hot encoder vocabulary per categorical column (`categories`)
//! - a gradient-boosted tree ensemble and its objective
//!
//! Columns absent from `categories` are passed through as numbers.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// Artifact layout revision this build understands.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_on: Option<NaiveDate>,
    pub features: Vec<String>,
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    pub objective: Objective,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

/// How tree outputs turn into the final scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Objective {
    /// `base_score + Σ leaves`.
    Regression,
    /// Trees are assigned round-robin to classes; the winning class label is returned.
    Multiclass { classes: Vec<f64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Go to `yes` when `x[feature] < threshold`, else `no`.
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
    },
    Leaf(f64),
}

impl ModelArtifact {
    /// Read an artifact from disk.
    pub fn read(path: &Path) -> Result<Self, PredictionError> {
        let file = File::open(path).map_err(|e| {
            PredictionError::Artifact(format!("failed to open '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PredictionError::Artifact(format!("invalid artifact '{}': {e}", path.display()))
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(json).map_err(|e| PredictionError::Artifact(format!("invalid artifact: {e}")))
    }

    pub fn is_categorical(&self, column: &str) -> bool {
        self.categories.contains_key(column)
    }

    /// Structural checks that don't depend on any input record.
    ///
    /// `encoded_width` is the length of the vector trees index into.
    pub fn validate(&self, encoded_width: usize) -> Result<(), PredictionError> {
        if self.format_version != FORMAT_VERSION {
            return Err(PredictionError::Artifact(format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                self.format_version
            )));
        }
        if self.features.is_empty() {
            return Err(PredictionError::Artifact("no feature columns".to_string()));
        }
        for (i, name) in self.features.iter().enumerate() {
            if self.features[..i].contains(name) {
                return Err(PredictionError::Artifact(format!("duplicate feature column '{name}'")));
            }
        }
        for (column, vocab) in &self.categories {
            if !self.features.contains(column) {
                return Err(PredictionError::Artifact(format!(
                    "vocabulary given for unknown column '{column}'"
                )));
            }
            if vocab.is_empty() {
                return Err(PredictionError::Artifact(format!("empty vocabulary for column '{column}'")));
            }
        }
        if self.trees.is_empty() {
            return Err(PredictionError::Artifact("ensemble has no trees".to_string()));
        }
        if let Objective::Multiclass { classes } = &self.objective {
            if classes.len() < 2 {
                return Err(PredictionError::Artifact(
                    "multiclass objective needs at least two classes".to_string(),
                ));
            }
            if self.trees.len() % classes.len() != 0 {
                return Err(PredictionError::Artifact(format!(
                    "{} trees cannot be split evenly across {} classes",
                    self.trees.len(),
                    classes.len()
                )));
            }
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate(encoded_width)
                .map_err(|msg| PredictionError::Artifact(format!("tree {t}: {msg}")))?;
        }
        Ok(())
    }
}

impl Tree {
    fn validate(&self, encoded_width: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        let n = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature, yes, no, ..
            } = node
            {
                if *feature >= encoded_width {
                    return Err(format!(
                        "node {i} splits on feature {feature}, encoded width is {encoded_width}"
                    ));
                }
                if *yes >= n || *no >= n {
                    return Err(format!("node {i} points outside the tree ({n} nodes)"));
                }
            }
        }
        Ok(())
    }
}
