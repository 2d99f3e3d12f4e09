//! Tree-ensemble scoring over an encoded feature vector.

use crate::error::PredictionError;
use crate::predictor::artifact::{ModelArtifact, Node, Objective, Tree};

impl Tree {
    /// Walk from the root to a leaf.
    ///
    /// A walk longer than the node count can only mean a cycle.
    pub fn eval(&self, x: &[f64]) -> Result<f64, PredictionError> {
        let mut idx = 0usize;
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(idx).ok_or_else(|| {
                PredictionError::MalformedModel(format!("node {idx} does not exist"))
            })?;
            match node {
                Node::Leaf(value) => return Ok(*value),
                Node::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                } => {
                    let v = x.get(*feature).copied().ok_or_else(|| {
                        PredictionError::MalformedModel(format!(
                            "split on feature {feature} beyond encoded width {}",
                            x.len()
                        ))
                    })?;
                    idx = if v < *threshold { *yes } else { *no };
                }
            }
        }
        Err(PredictionError::MalformedModel("cycle in tree".to_string()))
    }
}

/// Score an encoded row with the artifact's ensemble and objective.
pub fn score(artifact: &ModelArtifact, x: &[f64]) -> Result<f64, PredictionError> {
    let value = match &artifact.objective {
        Objective::Regression => {
            let mut sum = artifact.base_score;
            for tree in &artifact.trees {
                sum += tree.eval(x)?;
            }
            sum
        }
        Objective::Multiclass { classes } => {
            let mut margins = vec![artifact.base_score; classes.len()];
            for (t, tree) in artifact.trees.iter().enumerate() {
                margins[t % classes.len()] += tree.eval(x)?;
            }
            if margins.iter().any(|m| !m.is_finite()) {
                return Err(PredictionError::NonFinite);
            }
            // Strict `>` keeps the lower class index on ties.
            let mut best = 0;
            for (i, m) in margins.iter().enumerate().skip(1) {
                if *m > margins[best] {
                    best = i;
                }
            }
            classes[best]
        }
    };

    if !value.is_finite() {
        return Err(PredictionError::NonFinite);
    }
    Ok(value)
}
