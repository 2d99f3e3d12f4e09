//! Form state and key handling, independent of the terminal.
//!
//! Every row offers only legal choices: numeric rows clamp to their range and
//! choice rows cycle through the registry labels (or the five education
//! levels). The assembler still normalizes everything it receives.

use chrono::{DateTime, Local};
use crossterm::event::KeyCode;

use crate::app::pipeline::run_prediction;
use crate::domain::{NumericField, RawInputs};
use crate::predictor::Predictor;
use crate::registry::CategoricalField;

/// Outcomes kept in the history panel.
const HISTORY_LIMIT: usize = 50;
/// Step used by PgUp/PgDn on numeric rows.
const PAGE_STEP: i64 = 5;

/// One editable row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Numeric(NumericField),
    Education,
    Choice(CategoricalField),
}

/// Rows in display order. `EducationBackground` is not collected; the
/// assembler derives it from the education level.
pub const FORM_ROWS: [FormRow; 25] = [
    FormRow::Numeric(NumericField::Age),
    FormRow::Numeric(NumericField::DistanceFromHome),
    FormRow::Numeric(NumericField::EmpEnvironmentSatisfaction),
    FormRow::Numeric(NumericField::EmpHourlyRate),
    FormRow::Numeric(NumericField::EmpJobInvolvement),
    FormRow::Numeric(NumericField::EmpJobLevel),
    FormRow::Numeric(NumericField::EmpJobSatisfaction),
    FormRow::Numeric(NumericField::NumCompaniesWorked),
    FormRow::Numeric(NumericField::EmpLastSalaryHikePercent),
    FormRow::Numeric(NumericField::EmpRelationshipSatisfaction),
    FormRow::Numeric(NumericField::TotalWorkExperienceInYears),
    FormRow::Numeric(NumericField::TrainingTimesLastYear),
    FormRow::Numeric(NumericField::EmpWorkLifeBalance),
    FormRow::Numeric(NumericField::ExperienceYearsAtThisCompany),
    FormRow::Numeric(NumericField::ExperienceYearsInCurrentRole),
    FormRow::Numeric(NumericField::YearsSinceLastPromotion),
    FormRow::Numeric(NumericField::YearsWithCurrManager),
    FormRow::Choice(CategoricalField::Gender),
    FormRow::Education,
    FormRow::Choice(CategoricalField::MaritalStatus),
    FormRow::Choice(CategoricalField::EmpDepartment),
    FormRow::Choice(CategoricalField::EmpJobRole),
    FormRow::Choice(CategoricalField::BusinessTravelFrequency),
    FormRow::Choice(CategoricalField::OverTime),
    FormRow::Choice(CategoricalField::Attrition),
];

impl FormRow {
    pub fn label(self) -> &'static str {
        match self {
            FormRow::Numeric(field) => field.display_name(),
            FormRow::Education => "Education Level",
            FormRow::Choice(field) => field.display_name(),
        }
    }
}

/// A finished prediction attempt, as shown in the history panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub at: DateTime<Local>,
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub raw: RawInputs,
    pub selected: usize,
    pub status: String,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            raw: RawInputs::default(),
            selected: 0,
            status: "Fill in the form and press Enter to predict.".to_string(),
            history: Vec::new(),
        }
    }
}

impl FormState {
    pub fn selected_row(&self) -> FormRow {
        FORM_ROWS[self.selected]
    }

    /// Current value of a row as displayed.
    pub fn value_text(&self, row: FormRow) -> String {
        match row {
            FormRow::Numeric(field) => self.raw.numeric(field).to_string(),
            FormRow::Education => self.raw.education_level.label().to_string(),
            FormRow::Choice(field) => self.raw.categorical(field).to_string(),
        }
    }

    /// Handle a key press. Returns `true` when the form should close.
    pub fn handle_key(&mut self, code: KeyCode, predictor: &dyn Predictor) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < FORM_ROWS.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::PageDown => self.adjust(-PAGE_STEP),
            KeyCode::PageUp => self.adjust(PAGE_STEP),
            KeyCode::Home => self.jump_to_bound(false),
            KeyCode::End => self.jump_to_bound(true),
            KeyCode::Enter | KeyCode::Char('p') => self.submit(predictor),
            KeyCode::Char('r') => {
                self.raw = RawInputs::default();
                self.status = "Form reset to defaults.".to_string();
            }
            _ => {}
        }
        false
    }

    /// Move the selected row's value by `delta` steps.
    pub fn adjust(&mut self, delta: i64) {
        let row = self.selected_row();
        match row {
            FormRow::Numeric(field) => {
                let range = field.range();
                let slot = self.raw.numeric_mut(field);
                *slot = range.clamp(slot.saturating_add(delta));
            }
            FormRow::Education => {
                let mut level = self.raw.education_level;
                for _ in 0..delta.unsigned_abs() {
                    level = if delta > 0 { level.next() } else { level.prev() };
                }
                self.raw.education_level = level;
            }
            FormRow::Choice(field) => {
                let labels = field.labels();
                let current = labels
                    .iter()
                    .position(|l| *l == self.raw.categorical(field))
                    .unwrap_or(0) as i64;
                let next = (current + delta).rem_euclid(labels.len() as i64) as usize;
                self.raw.set_categorical(field, labels[next]);
            }
        }
        self.status = format!("{}: {}", row.label(), self.value_text(row));
    }

    fn jump_to_bound(&mut self, upper: bool) {
        if let FormRow::Numeric(field) = self.selected_row() {
            let range = field.range();
            *self.raw.numeric_mut(field) = if upper { range.max } else { range.min };
            self.status = format!("{}: {}", field.display_name(), self.raw.numeric(field));
        }
    }

    /// Run one prediction with the current inputs and record the result.
    pub fn submit(&mut self, predictor: &dyn Predictor) {
        let (ok, message) = match run_prediction(predictor, &self.raw) {
            Ok(outcome) => (true, crate::report::format_outcome(&outcome)),
            Err(err) => (false, crate::report::format_failure(&err)),
        };
        self.status = message.clone();
        self.history.insert(
            0,
            HistoryEntry {
                at: Local::now(),
                ok,
                message,
            },
        );
        self.history.truncate(HISTORY_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::PredictionError;
    use crate::features::FeatureRecord;
    use crate::registry::EducationLevel;

    struct Fixed {
        calls: Cell<usize>,
        answer: Result<f64, PredictionError>,
    }

    impl Fixed {
        fn new(answer: Result<f64, PredictionError>) -> Self {
            Self {
                calls: Cell::new(0),
                answer,
            }
        }
    }

    impl Predictor for Fixed {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, PredictionError> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    fn select(form: &mut FormState, row: FormRow) {
        form.selected = FORM_ROWS.iter().position(|r| *r == row).unwrap();
    }

    #[test]
    fn rows_cover_every_collected_input() {
        let numeric = FORM_ROWS
            .iter()
            .filter(|r| matches!(r, FormRow::Numeric(_)))
            .count();
        assert_eq!(numeric, NumericField::ALL.len());
        assert!(FORM_ROWS.contains(&FormRow::Education));
        for field in CategoricalField::ALL {
            let expected = field != CategoricalField::EducationBackground;
            assert_eq!(FORM_ROWS.contains(&FormRow::Choice(field)), expected, "{field:?}");
        }
    }

    #[test]
    fn numeric_rows_clamp_to_range() {
        let mut form = FormState::default();
        select(&mut form, FormRow::Numeric(NumericField::EmpJobLevel));
        for _ in 0..10 {
            form.adjust(1);
        }
        assert_eq!(form.raw.job_level, 5);
        form.adjust(-PAGE_STEP * 3);
        assert_eq!(form.raw.job_level, 1);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let predictor = Fixed::new(Ok(3.0));
        let mut form = FormState::default();
        select(&mut form, FormRow::Numeric(NumericField::Age));
        form.handle_key(KeyCode::End, &predictor);
        assert_eq!(form.raw.age, 70);
        form.handle_key(KeyCode::Home, &predictor);
        assert_eq!(form.raw.age, 18);
    }

    #[test]
    fn choice_rows_cycle_through_registry_labels() {
        let mut form = FormState::default();
        select(&mut form, FormRow::Choice(CategoricalField::MaritalStatus));
        form.adjust(1);
        assert_eq!(form.raw.marital_status, "Married");
        form.adjust(1);
        assert_eq!(form.raw.marital_status, "Divorced");
        form.adjust(1);
        assert_eq!(form.raw.marital_status, "Single");
        form.adjust(-1);
        assert_eq!(form.raw.marital_status, "Divorced");
    }

    #[test]
    fn education_row_cycles_levels() {
        let mut form = FormState::default();
        select(&mut form, FormRow::Education);
        form.adjust(3);
        assert_eq!(form.raw.education_level, EducationLevel::Master);
        form.adjust(-PAGE_STEP);
        assert_eq!(form.raw.education_level, EducationLevel::Master);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let predictor = Fixed::new(Ok(3.0));
        let mut form = FormState::default();
        form.handle_key(KeyCode::Up, &predictor);
        assert_eq!(form.selected, 0);
        for _ in 0..100 {
            form.handle_key(KeyCode::Down, &predictor);
        }
        assert_eq!(form.selected, FORM_ROWS.len() - 1);
    }

    #[test]
    fn enter_predicts_once_and_records_history() {
        let predictor = Fixed::new(Ok(3.0));
        let mut form = FormState::default();
        let quit = form.handle_key(KeyCode::Enter, &predictor);
        assert!(!quit);
        assert_eq!(predictor.calls.get(), 1);
        assert_eq!(form.status, "Predicted Performance: 3");
        assert_eq!(form.history.len(), 1);
        assert!(form.history[0].ok);
    }

    #[test]
    fn failures_are_shown_and_the_form_stays_usable() {
        let predictor = Fixed::new(Err(PredictionError::MalformedModel("cycle in tree".to_string())));
        let mut form = FormState::default();
        form.submit(&predictor);
        assert_eq!(form.status, "Error making prediction: malformed model: cycle in tree");
        assert!(!form.history[0].ok);

        form.submit(&predictor);
        assert_eq!(predictor.calls.get(), 2);
        assert_eq!(form.history.len(), 2);
    }

    #[test]
    fn history_is_bounded_and_newest_first() {
        let predictor = Fixed::new(Ok(2.0));
        let mut form = FormState::default();
        for _ in 0..(HISTORY_LIMIT + 5) {
            form.submit(&predictor);
        }
        assert_eq!(form.history.len(), HISTORY_LIMIT);
        assert!(form.history[0].at >= form.history[1].at);
    }

    #[test]
    fn q_and_esc_quit_and_reset_restores_defaults() {
        let predictor = Fixed::new(Ok(2.0));
        let mut form = FormState::default();
        form.adjust(5);
        form.handle_key(KeyCode::Char('r'), &predictor);
        assert_eq!(form.raw, RawInputs::default());
        assert!(form.handle_key(KeyCode::Char('q'), &predictor));
        assert!(form.handle_key(KeyCode::Esc, &predictor));
        assert_eq!(predictor.calls.get(), 0);
    }
}
