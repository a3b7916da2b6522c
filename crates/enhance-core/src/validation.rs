//! Required-field assessment.
//!
//! One submit attempt produces one report; nothing is carried between
//! attempts. The browser layer owns the visual annotation, this module
//! owns the decision and the user-facing messages.

use serde::{Deserialize, Serialize};

/// Message attached next to an empty required field.
pub const FIELD_REQUIRED_MESSAGE: &str = "Это поле обязательно для заполнения";

/// Summary shown when a submit attempt is blocked.
pub const FORM_INVALID_MESSAGE: &str = "Пожалуйста, заполните все обязательные поля";

/// Outcome of assessing a single required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOutcome {
    /// The trimmed value is non-empty.
    Filled,
    /// The trimmed value is empty; the field blocks submission.
    Missing,
}

/// Assess one required field's current value.
pub fn assess_required(value: &str) -> FieldOutcome {
    if value.trim().is_empty() {
        FieldOutcome::Missing
    } else {
        FieldOutcome::Filled
    }
}

/// Aggregated result of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    outcomes: Vec<FieldOutcome>,
}

impl FormReport {
    /// Record the outcome for one field, in document order.
    pub fn record(&mut self, outcome: FieldOutcome) {
        self.outcomes.push(outcome);
    }

    /// Whether the submit attempt may proceed.
    pub fn is_valid(&self) -> bool {
        !self
            .outcomes
            .iter()
            .any(|outcome| *outcome == FieldOutcome::Missing)
    }

    /// Number of fields assessed.
    pub fn field_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of fields blocking submission.
    pub fn missing_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| **outcome == FieldOutcome::Missing)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_missing() {
        assert_eq!(assess_required(""), FieldOutcome::Missing);
    }

    #[test]
    fn test_whitespace_only_value_is_missing() {
        assert_eq!(assess_required("   \t\n"), FieldOutcome::Missing);
    }

    #[test]
    fn test_filled_value_passes() {
        assert_eq!(assess_required("Иван"), FieldOutcome::Filled);
        assert_eq!(assess_required(" x "), FieldOutcome::Filled);
    }

    #[test]
    fn test_report_with_no_fields_is_valid() {
        assert!(FormReport::default().is_valid());
    }

    #[test]
    fn test_report_blocks_on_any_missing_field() {
        let mut report = FormReport::default();
        report.record(FieldOutcome::Filled);
        report.record(FieldOutcome::Missing);
        report.record(FieldOutcome::Filled);

        assert!(!report.is_valid());
        assert_eq!(report.field_count(), 3);
        assert_eq!(report.missing_count(), 1);
    }

    #[test]
    fn test_report_passes_when_all_filled() {
        let mut report = FormReport::default();
        report.record(FieldOutcome::Filled);
        report.record(FieldOutcome::Filled);

        assert!(report.is_valid());
        assert_eq!(report.missing_count(), 0);
    }
}
