//! Process-wide constant tables describing what the model was trained on.
//!
//! - categorical vocabularies + the safe normalizer (`categories`)
//! - the education-level ordinal table (`ordinal`)

pub mod categories;
pub mod ordinal;

pub use categories::{CategoricalField, labels_for_name, normalize, normalize_by_name};
pub use ordinal::{EducationLevel, to_ordinal};
