//! Shared domain types.
//!
//! This module defines:
//!
//! - the numeric input columns and their inclusive ranges (`NumericField`, `NumericRange`)
//! - the fixed, ordered feature schema (`FieldKind`, `FIELD_SCHEMA`)
//! - raw form inputs as collected from a user (`RawInputs`)
//! - a single assembled feature value (`FeatureValue`)

use serde::{Deserialize, Serialize};

use crate::registry::{CategoricalField, EducationLevel};

/// Inclusive bounds for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// A numeric column of the feature schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericField {
    Age,
    DistanceFromHome,
    EmpEnvironmentSatisfaction,
    EmpHourlyRate,
    EmpJobInvolvement,
    EmpJobLevel,
    EmpJobSatisfaction,
    NumCompaniesWorked,
    EmpLastSalaryHikePercent,
    EmpRelationshipSatisfaction,
    TotalWorkExperienceInYears,
    TrainingTimesLastYear,
    EmpWorkLifeBalance,
    ExperienceYearsAtThisCompany,
    ExperienceYearsInCurrentRole,
    YearsSinceLastPromotion,
    YearsWithCurrManager,
}

impl NumericField {
    /// All numeric fields, in feature-schema order.
    pub const ALL: [NumericField; 17] = [
        NumericField::Age,
        NumericField::DistanceFromHome,
        NumericField::EmpEnvironmentSatisfaction,
        NumericField::EmpHourlyRate,
        NumericField::EmpJobInvolvement,
        NumericField::EmpJobLevel,
        NumericField::EmpJobSatisfaction,
        NumericField::NumCompaniesWorked,
        NumericField::EmpLastSalaryHikePercent,
        NumericField::EmpRelationshipSatisfaction,
        NumericField::TotalWorkExperienceInYears,
        NumericField::TrainingTimesLastYear,
        NumericField::EmpWorkLifeBalance,
        NumericField::ExperienceYearsAtThisCompany,
        NumericField::ExperienceYearsInCurrentRole,
        NumericField::YearsSinceLastPromotion,
        NumericField::YearsWithCurrManager,
    ];

    /// Column name as the model knows it.
    pub fn name(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::DistanceFromHome => "DistanceFromHome",
            NumericField::EmpEnvironmentSatisfaction => "EmpEnvironmentSatisfaction",
            NumericField::EmpHourlyRate => "EmpHourlyRate",
            NumericField::EmpJobInvolvement => "EmpJobInvolvement",
            NumericField::EmpJobLevel => "EmpJobLevel",
            NumericField::EmpJobSatisfaction => "EmpJobSatisfaction",
            NumericField::NumCompaniesWorked => "NumCompaniesWorked",
            NumericField::EmpLastSalaryHikePercent => "EmpLastSalaryHikePercent",
            NumericField::EmpRelationshipSatisfaction => "EmpRelationshipSatisfaction",
            NumericField::TotalWorkExperienceInYears => "TotalWorkExperienceInYears",
            NumericField::TrainingTimesLastYear => "TrainingTimesLastYear",
            NumericField::EmpWorkLifeBalance => "EmpWorkLifeBalance",
            NumericField::ExperienceYearsAtThisCompany => "ExperienceYearsAtThisCompany",
            NumericField::ExperienceYearsInCurrentRole => "ExperienceYearsInCurrentRole",
            NumericField::YearsSinceLastPromotion => "YearsSinceLastPromotion",
            NumericField::YearsWithCurrManager => "YearsWithCurrManager",
        }
    }

    /// Human-readable label for form rows.
    pub fn display_name(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::DistanceFromHome => "Distance from Home (km)",
            NumericField::EmpEnvironmentSatisfaction => "Environment Satisfaction (1-4)",
            NumericField::EmpHourlyRate => "Hourly Rate",
            NumericField::EmpJobInvolvement => "Job Involvement (1-4)",
            NumericField::EmpJobLevel => "Job Level",
            NumericField::EmpJobSatisfaction => "Job Satisfaction (1-4)",
            NumericField::NumCompaniesWorked => "Number of Companies Worked",
            NumericField::EmpLastSalaryHikePercent => "Last Salary Hike %",
            NumericField::EmpRelationshipSatisfaction => "Relationship Satisfaction (1-4)",
            NumericField::TotalWorkExperienceInYears => "Total Work Experience (Years)",
            NumericField::TrainingTimesLastYear => "Training Times Last Year",
            NumericField::EmpWorkLifeBalance => "Work Life Balance (1-4)",
            NumericField::ExperienceYearsAtThisCompany => "Years at This Company",
            NumericField::ExperienceYearsInCurrentRole => "Years in Current Role",
            NumericField::YearsSinceLastPromotion => "Years Since Last Promotion",
            NumericField::YearsWithCurrManager => "Years with Current Manager",
        }
    }

    pub fn range(self) -> NumericRange {
        match self {
            NumericField::Age => NumericRange::new(18, 70),
            NumericField::DistanceFromHome => NumericRange::new(0, 100),
            NumericField::EmpEnvironmentSatisfaction => NumericRange::new(1, 4),
            NumericField::EmpHourlyRate => NumericRange::new(0, 1000),
            NumericField::EmpJobInvolvement => NumericRange::new(1, 4),
            NumericField::EmpJobLevel => NumericRange::new(1, 5),
            NumericField::EmpJobSatisfaction => NumericRange::new(1, 4),
            NumericField::NumCompaniesWorked => NumericRange::new(0, 20),
            NumericField::EmpLastSalaryHikePercent => NumericRange::new(0, 100),
            NumericField::EmpRelationshipSatisfaction => NumericRange::new(1, 4),
            NumericField::TotalWorkExperienceInYears => NumericRange::new(0, 50),
            NumericField::TrainingTimesLastYear => NumericRange::new(0, 20),
            NumericField::EmpWorkLifeBalance => NumericRange::new(1, 4),
            NumericField::ExperienceYearsAtThisCompany => NumericRange::new(0, 50),
            NumericField::ExperienceYearsInCurrentRole => NumericRange::new(0, 50),
            NumericField::YearsSinceLastPromotion => NumericRange::new(0, 50),
            NumericField::YearsWithCurrManager => NumericRange::new(0, 50),
        }
    }

    /// Initial value shown by the form.
    pub fn default_value(self) -> i64 {
        match self {
            NumericField::Age => 30,
            NumericField::DistanceFromHome => 10,
            NumericField::EmpEnvironmentSatisfaction => 3,
            NumericField::EmpHourlyRate => 50,
            NumericField::EmpJobInvolvement => 3,
            NumericField::EmpJobLevel => 2,
            NumericField::EmpJobSatisfaction => 3,
            NumericField::NumCompaniesWorked => 1,
            NumericField::EmpLastSalaryHikePercent => 10,
            NumericField::EmpRelationshipSatisfaction => 3,
            NumericField::TotalWorkExperienceInYears => 5,
            NumericField::TrainingTimesLastYear => 2,
            NumericField::EmpWorkLifeBalance => 3,
            NumericField::ExperienceYearsAtThisCompany => 3,
            NumericField::ExperienceYearsInCurrentRole => 2,
            NumericField::YearsSinceLastPromotion => 1,
            NumericField::YearsWithCurrManager => 2,
        }
    }
}

/// Name of the ordinal education column.
pub const EDUCATION_LEVEL_COLUMN: &str = "EmpEducationLevel";

/// What kind of value a schema slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric(NumericField),
    /// `EmpEducationLevel`, encoded through the ordinal table.
    Ordinal,
    Categorical(CategoricalField),
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Numeric(field) => field.name(),
            FieldKind::Ordinal => EDUCATION_LEVEL_COLUMN,
            FieldKind::Categorical(field) => field.name(),
        }
    }
}

/// Number of columns in a feature record.
pub const FIELD_COUNT: usize = 26;

/// Feature columns in the exact order the model was trained on.
pub const FIELD_SCHEMA: [FieldKind; FIELD_COUNT] = [
    FieldKind::Numeric(NumericField::Age),
    FieldKind::Numeric(NumericField::DistanceFromHome),
    FieldKind::Ordinal,
    FieldKind::Numeric(NumericField::EmpEnvironmentSatisfaction),
    FieldKind::Numeric(NumericField::EmpHourlyRate),
    FieldKind::Numeric(NumericField::EmpJobInvolvement),
    FieldKind::Numeric(NumericField::EmpJobLevel),
    FieldKind::Numeric(NumericField::EmpJobSatisfaction),
    FieldKind::Numeric(NumericField::NumCompaniesWorked),
    FieldKind::Numeric(NumericField::EmpLastSalaryHikePercent),
    FieldKind::Numeric(NumericField::EmpRelationshipSatisfaction),
    FieldKind::Numeric(NumericField::TotalWorkExperienceInYears),
    FieldKind::Numeric(NumericField::TrainingTimesLastYear),
    FieldKind::Numeric(NumericField::EmpWorkLifeBalance),
    FieldKind::Numeric(NumericField::ExperienceYearsAtThisCompany),
    FieldKind::Numeric(NumericField::ExperienceYearsInCurrentRole),
    FieldKind::Numeric(NumericField::YearsSinceLastPromotion),
    FieldKind::Numeric(NumericField::YearsWithCurrManager),
    FieldKind::Categorical(CategoricalField::Gender),
    FieldKind::Categorical(CategoricalField::EducationBackground),
    FieldKind::Categorical(CategoricalField::MaritalStatus),
    FieldKind::Categorical(CategoricalField::EmpDepartment),
    FieldKind::Categorical(CategoricalField::EmpJobRole),
    FieldKind::Categorical(CategoricalField::BusinessTravelFrequency),
    FieldKind::Categorical(CategoricalField::OverTime),
    FieldKind::Categorical(CategoricalField::Attrition),
];

/// One value per form input, as collected from a user.
///
/// Numeric ranges are the collector's responsibility (see `io::input::validate_ranges`).
/// Categorical values are plain strings and may be anything; the assembler
/// normalizes them. Missing keys take the form's initial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawInputs {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "DistanceFromHome")]
    pub distance_from_home: i64,
    #[serde(rename = "EmpEnvironmentSatisfaction")]
    pub environment_satisfaction: i64,
    #[serde(rename = "EmpHourlyRate")]
    pub hourly_rate: i64,
    #[serde(rename = "EmpJobInvolvement")]
    pub job_involvement: i64,
    #[serde(rename = "EmpJobLevel")]
    pub job_level: i64,
    #[serde(rename = "EmpJobSatisfaction")]
    pub job_satisfaction: i64,
    #[serde(rename = "NumCompaniesWorked")]
    pub num_companies_worked: i64,
    #[serde(rename = "EmpLastSalaryHikePercent")]
    pub last_salary_hike_percent: i64,
    #[serde(rename = "EmpRelationshipSatisfaction")]
    pub relationship_satisfaction: i64,
    #[serde(rename = "TotalWorkExperienceInYears")]
    pub total_work_experience: i64,
    #[serde(rename = "TrainingTimesLastYear")]
    pub training_times_last_year: i64,
    #[serde(rename = "EmpWorkLifeBalance")]
    pub work_life_balance: i64,
    #[serde(rename = "ExperienceYearsAtThisCompany")]
    pub years_at_company: i64,
    #[serde(rename = "ExperienceYearsInCurrentRole")]
    pub years_in_current_role: i64,
    #[serde(rename = "YearsSinceLastPromotion")]
    pub years_since_last_promotion: i64,
    #[serde(rename = "YearsWithCurrManager")]
    pub years_with_manager: i64,

    #[serde(rename = "EducationLevel")]
    pub education_level: EducationLevel,

    #[serde(rename = "Gender")]
    pub gender: String,
    /// When absent, the education-level label is normalized into this column.
    #[serde(rename = "EducationBackground", skip_serializing_if = "Option::is_none")]
    pub education_background: Option<String>,
    #[serde(rename = "MaritalStatus")]
    pub marital_status: String,
    #[serde(rename = "EmpDepartment")]
    pub department: String,
    #[serde(rename = "EmpJobRole")]
    pub job_role: String,
    #[serde(rename = "BusinessTravelFrequency")]
    pub business_travel: String,
    #[serde(rename = "OverTime")]
    pub overtime: String,
    #[serde(rename = "Attrition")]
    pub attrition: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        let mut raw = Self {
            age: 0,
            distance_from_home: 0,
            environment_satisfaction: 0,
            hourly_rate: 0,
            job_involvement: 0,
            job_level: 0,
            job_satisfaction: 0,
            num_companies_worked: 0,
            last_salary_hike_percent: 0,
            relationship_satisfaction: 0,
            total_work_experience: 0,
            training_times_last_year: 0,
            work_life_balance: 0,
            years_at_company: 0,
            years_in_current_role: 0,
            years_since_last_promotion: 0,
            years_with_manager: 0,
            education_level: EducationLevel::BelowCollege,
            gender: String::new(),
            education_background: None,
            marital_status: String::new(),
            department: String::new(),
            job_role: String::new(),
            business_travel: String::new(),
            overtime: String::new(),
            attrition: String::new(),
        };
        for field in NumericField::ALL {
            *raw.numeric_mut(field) = field.default_value();
        }
        for field in CategoricalField::ALL {
            if field != CategoricalField::EducationBackground {
                raw.set_categorical(field, field.fallback());
            }
        }
        raw
    }
}

impl RawInputs {
    pub fn numeric(&self, field: NumericField) -> i64 {
        match field {
            NumericField::Age => self.age,
            NumericField::DistanceFromHome => self.distance_from_home,
            NumericField::EmpEnvironmentSatisfaction => self.environment_satisfaction,
            NumericField::EmpHourlyRate => self.hourly_rate,
            NumericField::EmpJobInvolvement => self.job_involvement,
            NumericField::EmpJobLevel => self.job_level,
            NumericField::EmpJobSatisfaction => self.job_satisfaction,
            NumericField::NumCompaniesWorked => self.num_companies_worked,
            NumericField::EmpLastSalaryHikePercent => self.last_salary_hike_percent,
            NumericField::EmpRelationshipSatisfaction => self.relationship_satisfaction,
            NumericField::TotalWorkExperienceInYears => self.total_work_experience,
            NumericField::TrainingTimesLastYear => self.training_times_last_year,
            NumericField::EmpWorkLifeBalance => self.work_life_balance,
            NumericField::ExperienceYearsAtThisCompany => self.years_at_company,
            NumericField::ExperienceYearsInCurrentRole => self.years_in_current_role,
            NumericField::YearsSinceLastPromotion => self.years_since_last_promotion,
            NumericField::YearsWithCurrManager => self.years_with_manager,
        }
    }

    pub fn numeric_mut(&mut self, field: NumericField) -> &mut i64 {
        match field {
            NumericField::Age => &mut self.age,
            NumericField::DistanceFromHome => &mut self.distance_from_home,
            NumericField::EmpEnvironmentSatisfaction => &mut self.environment_satisfaction,
            NumericField::EmpHourlyRate => &mut self.hourly_rate,
            NumericField::EmpJobInvolvement => &mut self.job_involvement,
            NumericField::EmpJobLevel => &mut self.job_level,
            NumericField::EmpJobSatisfaction => &mut self.job_satisfaction,
            NumericField::NumCompaniesWorked => &mut self.num_companies_worked,
            NumericField::EmpLastSalaryHikePercent => &mut self.last_salary_hike_percent,
            NumericField::EmpRelationshipSatisfaction => &mut self.relationship_satisfaction,
            NumericField::TotalWorkExperienceInYears => &mut self.total_work_experience,
            NumericField::TrainingTimesLastYear => &mut self.training_times_last_year,
            NumericField::EmpWorkLifeBalance => &mut self.work_life_balance,
            NumericField::ExperienceYearsAtThisCompany => &mut self.years_at_company,
            NumericField::ExperienceYearsInCurrentRole => &mut self.years_in_current_role,
            NumericField::YearsSinceLastPromotion => &mut self.years_since_last_promotion,
            NumericField::YearsWithCurrManager => &mut self.years_with_manager,
        }
    }

    /// Candidate label for a categorical column, before normalization.
    ///
    /// `EducationBackground` falls back to the education-level label when no
    /// explicit background was collected.
    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::Gender => &self.gender,
            CategoricalField::EducationBackground => self
                .education_background
                .as_deref()
                .unwrap_or_else(|| self.education_level.label()),
            CategoricalField::MaritalStatus => &self.marital_status,
            CategoricalField::EmpDepartment => &self.department,
            CategoricalField::EmpJobRole => &self.job_role,
            CategoricalField::BusinessTravelFrequency => &self.business_travel,
            CategoricalField::OverTime => &self.overtime,
            CategoricalField::Attrition => &self.attrition,
        }
    }

    pub fn set_categorical(&mut self, field: CategoricalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CategoricalField::Gender => self.gender = value,
            CategoricalField::EducationBackground => self.education_background = Some(value),
            CategoricalField::MaritalStatus => self.marital_status = value,
            CategoricalField::EmpDepartment => self.department = value,
            CategoricalField::EmpJobRole => self.job_role = value,
            CategoricalField::BusinessTravelFrequency => self.business_travel = value,
            CategoricalField::OverTime => self.overtime = value,
            CategoricalField::Attrition => self.attrition = value,
        }
    }
}

/// A single assembled column value.
///
/// Labels are borrowed from the category registry, never from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Label(&'static str),
}

impl FeatureValue {
    pub fn as_int(self) -> Option<i64> {
        match self {
            FeatureValue::Int(v) => Some(v),
            FeatureValue::Label(_) => None,
        }
    }

    pub fn as_label(self) -> Option<&'static str> {
        match self {
            FeatureValue::Int(_) => None,
            FeatureValue::Label(label) => Some(label),
        }
    }
}

impl std::fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{v}"),
            FeatureValue::Label(label) => write!(f, "{label}"),
        }
    }
}
