//! Training-time vocabulary for the categorical columns.
//!
//! The model's one-hot encoder only knows the labels it saw during training.
//! Each field maps to a closed, ordered label list whose first entry is the
//! fallback used when a candidate label is not recognized.

use serde::{Deserialize, Serialize};

const GENDER: &[&str] = &["Male", "Female"];
const EDUCATION_BACKGROUND: &[&str] = &["College", "Bachelor", "Master"];
const MARITAL_STATUS: &[&str] = &["Single", "Married", "Divorced"];
const EMP_DEPARTMENT: &[&str] = &["Sales", "Research & Development", "HR"];
const EMP_JOB_ROLE: &[&str] = &[
    "Sales Executive",
    "Research Scientist",
    "Laboratory Technician",
    "Manufacturing Director",
    "Healthcare Representative",
    "Manager",
    "Sales Representative",
    "Research Director",
    "Human Resources",
];
const BUSINESS_TRAVEL_FREQUENCY: &[&str] = &["Travel_Rarely", "Travel_Frequently", "Non-Travel"];
const OVER_TIME: &[&str] = &["Yes", "No"];
const ATTRITION: &[&str] = &["Yes", "No"];

/// A categorical column of the feature schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoricalField {
    Gender,
    EducationBackground,
    MaritalStatus,
    EmpDepartment,
    EmpJobRole,
    BusinessTravelFrequency,
    OverTime,
    Attrition,
}

impl CategoricalField {
    /// All categorical fields, in feature-schema order.
    pub const ALL: [CategoricalField; 8] = [
        CategoricalField::Gender,
        CategoricalField::EducationBackground,
        CategoricalField::MaritalStatus,
        CategoricalField::EmpDepartment,
        CategoricalField::EmpJobRole,
        CategoricalField::BusinessTravelFrequency,
        CategoricalField::OverTime,
        CategoricalField::Attrition,
    ];

    /// Column name as the model knows it.
    pub fn name(self) -> &'static str {
        match self {
            CategoricalField::Gender => "Gender",
            CategoricalField::EducationBackground => "EducationBackground",
            CategoricalField::MaritalStatus => "MaritalStatus",
            CategoricalField::EmpDepartment => "EmpDepartment",
            CategoricalField::EmpJobRole => "EmpJobRole",
            CategoricalField::BusinessTravelFrequency => "BusinessTravelFrequency",
            CategoricalField::OverTime => "OverTime",
            CategoricalField::Attrition => "Attrition",
        }
    }

    /// Human-readable label for form rows.
    pub fn display_name(self) -> &'static str {
        match self {
            CategoricalField::Gender => "Gender",
            CategoricalField::EducationBackground => "Education Background",
            CategoricalField::MaritalStatus => "Marital Status",
            CategoricalField::EmpDepartment => "Department",
            CategoricalField::EmpJobRole => "Job Role",
            CategoricalField::BusinessTravelFrequency => "Business Travel Frequency",
            CategoricalField::OverTime => "OverTime",
            CategoricalField::Attrition => "Attrition",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Legal labels in registry order. Never empty.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            CategoricalField::Gender => GENDER,
            CategoricalField::EducationBackground => EDUCATION_BACKGROUND,
            CategoricalField::MaritalStatus => MARITAL_STATUS,
            CategoricalField::EmpDepartment => EMP_DEPARTMENT,
            CategoricalField::EmpJobRole => EMP_JOB_ROLE,
            CategoricalField::BusinessTravelFrequency => BUSINESS_TRAVEL_FREQUENCY,
            CategoricalField::OverTime => OVER_TIME,
            CategoricalField::Attrition => ATTRITION,
        }
    }

    /// The label substituted for anything the registry does not know.
    pub fn fallback(self) -> &'static str {
        self.labels()[0]
    }

    pub fn contains(self, value: &str) -> bool {
        self.labels().contains(&value)
    }
}

/// Look up a field's labels by column name.
///
/// # Panics
/// Panics if `name` is not a categorical column. Field names are fixed at
/// compile time, so an unknown name is an integration bug rather than bad input.
pub fn labels_for_name(name: &str) -> &'static [&'static str] {
    match CategoricalField::from_name(name) {
        Some(field) => field.labels(),
        None => panic!("'{name}' is not a categorical field of the feature schema"),
    }
}

/// Map any candidate label to one the model was trained on.
///
/// Known labels come back unchanged (as the registry's own `'static` copy);
/// everything else becomes the field's fallback label. Matching is exact.
pub fn normalize(value: &str, field: CategoricalField) -> &'static str {
    match field.labels().iter().copied().find(|label| *label == value) {
        Some(label) => label,
        None => {
            let fallback = field.fallback();
            tracing::debug!(
                field = field.name(),
                value,
                fallback,
                "substituted out-of-vocabulary category"
            );
            fallback
        }
    }
}

/// String-keyed variant of [`normalize`].
///
/// # Panics
/// Panics if `field_name` is not a categorical column (see [`labels_for_name`]).
pub fn normalize_by_name(value: &str, field_name: &str) -> &'static str {
    match CategoricalField::from_name(field_name) {
        Some(field) => normalize(value, field),
        None => panic!("'{field_name}' is not a categorical field of the feature schema"),
    }
}
