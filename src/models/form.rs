//! Form snapshots
//!
//! An `EntryForm` is the raw text a user typed for each field. It is an
//! immutable value: front ends build one, hand it to `validate`, and get either
//! a complete `DailyEntry` or the first field that failed. Nothing is stored
//! until validation succeeds for every field.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::entry::{DailyEntry, MorningJuice};
use super::field::{Field, FieldKind};
use super::quantity::Quantity;
use crate::error::{HabitError, HabitResult};

/// Raw text for every field of a day's form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    values: BTreeMap<Field, String>,
}

impl Default for EntryForm {
    /// A cleared form: every field blank, morning juice "No"
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(Field::MorningJuice, MorningJuice::No.to_string());
        Self { values }
    }
}

impl EntryForm {
    /// A cleared form
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Populate a form from a stored entry
    pub fn from_entry(entry: &DailyEntry) -> Self {
        let values = Field::ALL
            .into_iter()
            .map(|field| (field, entry.display_value(field)))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        Self { values }
    }

    /// Return a copy of this form with one field replaced
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Raw text of a field (empty when blank)
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Validate every field and build the entry to store
    ///
    /// Fields are checked in form order and the first failure is returned.
    /// Empty numeric fields become absent in the entry; whitespace alone is
    /// not a number and is rejected. Notes made only of whitespace are absent.
    pub fn validate(&self) -> HabitResult<DailyEntry> {
        let mut entry = DailyEntry::new();

        for field in Field::ALL {
            let raw = self.get(field);
            match field.kind() {
                FieldKind::Choice => {
                    entry.morning_juice = raw.parse().map_err(HabitError::Validation)?;
                }
                FieldKind::Number => {
                    if raw.is_empty() {
                        continue;
                    }
                    let value = Quantity::parse(raw)
                        .map_err(|_| HabitError::invalid_field(field.label(), raw))?;
                    entry.set_quantity(field, Some(value));
                }
                FieldKind::Text => {
                    if !raw.trim().is_empty() {
                        entry.notes = Some(raw.to_string());
                    }
                }
            }
        }

        Ok(entry)
    }
}

/// Year, month and day picked independently by the user
///
/// The combination may not exist on the calendar (day 31 of April).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateSelection {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }

    /// The calendar date, or `None` for an impossible combination
    pub fn resolve(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible dates
pub fn parse_date(s: &str) -> HabitResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| HabitError::InvalidDate(format!("'{}' (expected YYYY-MM-DD)", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_form_validates_to_blank_entry() {
        let entry = EntryForm::cleared().validate().unwrap();
        assert!(entry.is_blank());
        assert_eq!(entry.morning_juice, MorningJuice::No);
    }

    #[test]
    fn test_valid_form() {
        let entry = EntryForm::cleared()
            .with(Field::MorningJuice, "Yes")
            .with(Field::WaterIntake, "2.5")
            .with(Field::GithubCommits, "4")
            .with(Field::Notes, "Good day")
            .validate()
            .unwrap();

        assert_eq!(entry.morning_juice, MorningJuice::Yes);
        assert_eq!(entry.water_intake.unwrap().value(), 2.5);
        assert_eq!(entry.github_commits.unwrap().value(), 4.0);
        assert_eq!(entry.notes.as_deref(), Some("Good day"));
        assert!(entry.money_earned.is_none());
    }

    #[test]
    fn test_negative_value_rejected_with_field_name() {
        let err = EntryForm::cleared()
            .with(Field::MoneySpent, "-5")
            .validate()
            .unwrap_err();

        match err {
            HabitError::InvalidField { field, value } => {
                assert_eq!(field, "Money Spent");
                assert_eq!(value, "-5");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let err = EntryForm::cleared()
            .with(Field::SleepHours, "abc")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("Sleep Hours"));
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = EntryForm::cleared()
            .with(Field::MoneyEarned, "x")
            .with(Field::WaterIntake, "y")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("Water Intake"));
    }

    #[test]
    fn test_whitespace_only_number_rejected() {
        let err = EntryForm::cleared()
            .with(Field::WaterIntake, "   ")
            .validate()
            .unwrap_err();

        match err {
            HabitError::InvalidField { field, value } => {
                assert_eq!(field, "Water Intake");
                assert_eq!(value, "   ");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_padded_number_accepted() {
        let entry = EntryForm::cleared()
            .with(Field::SleepHours, " 7.5 ")
            .validate()
            .unwrap();
        assert_eq!(entry.sleep_hours.unwrap().value(), 7.5);
    }

    #[test]
    fn test_blank_juice_means_no() {
        let entry = EntryForm::cleared()
            .with(Field::MorningJuice, "")
            .validate()
            .unwrap();
        assert_eq!(entry.morning_juice, MorningJuice::No);
    }

    #[test]
    fn test_invalid_juice_rejected() {
        let err = EntryForm::cleared()
            .with(Field::MorningJuice, "sometimes")
            .validate()
            .unwrap_err();
        assert!(matches!(err, HabitError::Validation(_)));
    }

    #[test]
    fn test_from_entry_round_trip() {
        let original = EntryForm::cleared()
            .with(Field::MorningJuice, "Yes")
            .with(Field::EducationTime, "30")
            .with(Field::MoneyEarned, "12.75")
            .validate()
            .unwrap();

        let form = EntryForm::from_entry(&original);
        assert_eq!(form.get(Field::EducationTime), "30");
        assert_eq!(form.get(Field::MoneyEarned), "12.75");
        assert_eq!(form.get(Field::Notes), "");
        assert_eq!(form.validate().unwrap(), original);
    }

    #[test]
    fn test_date_selection() {
        assert!(DateSelection::new(2024, 4, 31).resolve().is_none());
        assert!(DateSelection::new(2023, 2, 29).resolve().is_none());
        assert_eq!(
            DateSelection::new(2024, 2, 29).resolve(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-03-01").is_ok());
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(HabitError::InvalidDate(_))
        ));
        assert!(parse_date("yesterday").is_err());
    }
}
