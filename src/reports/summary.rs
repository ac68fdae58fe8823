//! Summary aggregation
//!
//! Folds the entries of a year file into totals, optionally restricted to one
//! calendar month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month};
use tracing::warn;

use crate::error::HabitError;
use crate::models::{DailyEntry, Field, YearFile};

/// Which slice of a year a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// The whole year
    Year,
    /// One calendar month (1-12)
    Month(u32),
}

impl ReportPeriod {
    /// Month number, `None` for the whole year
    pub fn month(&self) -> Option<u32> {
        match self {
            Self::Year => None,
            Self::Month(m) => Some(*m),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = HabitError;

    /// Accepts "All", a month name ("March", "mar") or a number 1-12
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::Year);
        }
        if let Ok(number) = s.parse::<u32>() {
            return if (1..=12).contains(&number) {
                Ok(Self::Month(number))
            } else {
                Err(HabitError::Validation(format!(
                    "Month must be between 1 and 12, got {}",
                    number
                )))
            };
        }
        s.parse::<Month>()
            .map(|m| Self::Month(m.number_from_month()))
            .map_err(|_| {
                HabitError::Validation(format!(
                    "Invalid month '{}'. Use All, a month name or 1-12",
                    s
                ))
            })
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "All"),
            Self::Month(m) => write!(f, "{}", month_name(*m)),
        }
    }
}

/// Full English month name for 1-12
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Totals over a set of entries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub entry_count: usize,
    pub total_earned: f64,
    pub total_spent: f64,
    pub total_study_time: f64,
    pub total_improvement_time: f64,
    /// Days with morning juice; only tracked for yearly summaries
    pub juice_days: Option<usize>,
}

impl Summary {
    /// Empty summary, counting juice days when `track_juice` is set
    pub fn new(track_juice: bool) -> Self {
        Self {
            juice_days: track_juice.then_some(0),
            ..Self::default()
        }
    }

    /// Accumulate one entry
    pub fn add(&mut self, entry: &DailyEntry) {
        self.entry_count += 1;
        self.total_earned += entry.quantity_or_zero(Field::MoneyEarned).value();
        self.total_spent += entry.quantity_or_zero(Field::MoneySpent).value();
        self.total_study_time += entry.quantity_or_zero(Field::EducationTime).value();
        self.total_improvement_time += entry.quantity_or_zero(Field::SelfImprovementTime).value();
        if let Some(days) = self.juice_days.as_mut() {
            if entry.morning_juice.is_yes() {
                *days += 1;
            }
        }
    }

    pub fn net_balance(&self) -> f64 {
        self.total_earned - self.total_spent
    }

    pub fn combined_productivity(&self) -> f64 {
        self.total_study_time + self.total_improvement_time
    }

    /// Percentage of entries with morning juice, 0 when there are no entries
    pub fn juice_consistency_pct(&self) -> f64 {
        match self.juice_days {
            Some(days) if self.entry_count > 0 => days as f64 / self.entry_count as f64 * 100.0,
            _ => 0.0,
        }
    }
}

/// Aggregate a year file, restricted to `month` when given
///
/// The yearly summary counts every entry and tracks juice days. A monthly
/// summary skips entries whose key is not a valid date.
pub fn aggregate(year_file: &YearFile, month: Option<u32>) -> Summary {
    let mut summary = Summary::new(month.is_none());

    match month {
        None => {
            for (_, entry) in year_file.iter() {
                summary.add(entry);
            }
        }
        Some(month) => {
            for item in year_file.dated_entries() {
                match item {
                    Ok((date, entry)) if date.month() == month => summary.add(entry),
                    Ok(_) => {}
                    Err(key) => warn!(key, "skipping entry with unparseable date key"),
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MorningJuice, Quantity};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(earned: Option<f64>, spent: Option<f64>) -> DailyEntry {
        let mut entry = DailyEntry::new();
        entry.money_earned = earned.map(|v| Quantity::new(v).unwrap());
        entry.money_spent = spent.map(|v| Quantity::new(v).unwrap());
        entry
    }

    fn juice(yes: bool) -> DailyEntry {
        let mut entry = DailyEntry::new();
        entry.morning_juice = if yes { MorningJuice::Yes } else { MorningJuice::No };
        entry
    }

    #[test]
    fn test_monthly_example() {
        let year: YearFile = [
            (date(2024, 3, 1), entry(Some(100.0), Some(40.0))),
            (date(2024, 3, 2), entry(Some(50.0), None)),
            (date(2024, 4, 1), entry(Some(999.0), None)),
        ]
        .into_iter()
        .collect();

        let summary = aggregate(&year, Some(3));
        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.total_earned, 150.0);
        assert_eq!(summary.total_spent, 40.0);
        assert_eq!(summary.net_balance(), 110.0);
        assert!(summary.juice_days.is_none());
    }

    #[test]
    fn test_yearly_counts_every_entry() {
        let mut year: YearFile = [
            (date(2024, 1, 1), juice(true)),
            (date(2024, 6, 1), juice(false)),
        ]
        .into_iter()
        .collect();
        year.insert_raw("garbage", juice(true));

        let summary = aggregate(&year, None);
        assert_eq!(summary.entry_count, year.len());
        assert_eq!(summary.juice_days, Some(2));
    }

    #[test]
    fn test_monthly_skips_unparseable_keys() {
        let mut year = YearFile::new();
        year.insert(date(2024, 3, 5), entry(Some(10.0), None));
        year.insert_raw("2024-13-01", entry(Some(500.0), None));

        let summary = aggregate(&year, Some(3));
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.total_earned, 10.0);
    }

    #[test]
    fn test_juice_consistency() {
        let year: YearFile = [
            (date(2024, 1, 1), juice(true)),
            (date(2024, 1, 2), juice(true)),
            (date(2024, 1, 3), juice(false)),
            (date(2024, 1, 4), juice(true)),
        ]
        .into_iter()
        .collect();

        let summary = aggregate(&year, None);
        assert_eq!(summary.juice_days, Some(3));
        assert!((summary.juice_consistency_pct() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_year_has_zero_consistency() {
        let summary = aggregate(&YearFile::new(), None);
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.juice_consistency_pct(), 0.0);
    }

    #[test]
    fn test_productivity_totals() {
        let mut day = DailyEntry::new();
        day.education_time = Some(Quantity::new(30.0).unwrap());
        day.self_improvement_time = Some(Quantity::new(15.5).unwrap());
        let year: YearFile = [(date(2024, 2, 2), day)].into_iter().collect();

        let summary = aggregate(&year, Some(2));
        assert_eq!(summary.total_study_time, 30.0);
        assert_eq!(summary.total_improvement_time, 15.5);
        assert_eq!(summary.combined_productivity(), 45.5);
    }

    #[test]
    fn test_report_period_parse() {
        assert_eq!("All".parse::<ReportPeriod>().unwrap(), ReportPeriod::Year);
        assert_eq!("March".parse::<ReportPeriod>().unwrap(), ReportPeriod::Month(3));
        assert_eq!("dec".parse::<ReportPeriod>().unwrap(), ReportPeriod::Month(12));
        assert_eq!("7".parse::<ReportPeriod>().unwrap(), ReportPeriod::Month(7));
        assert!("13".parse::<ReportPeriod>().is_err());
        assert!("Smarch".parse::<ReportPeriod>().is_err());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
    }
}
