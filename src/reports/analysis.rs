//! Analysis Report
//!
//! Monthly or yearly summary of finances, productivity and habit consistency.

use std::io::Write;

use crate::display::report::format_money;
use crate::error::{HabitError, HabitResult};
use crate::storage::YearStore;

use super::summary::{aggregate, month_name, ReportPeriod, Summary};

/// Analysis of one year, or one month of it
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub year: i32,
    pub period: ReportPeriod,
    /// `None` when the year has no stored entries at all
    pub summary: Option<Summary>,
}

impl AnalysisReport {
    /// Generate the report from stored data
    pub fn generate(years: &YearStore, year: i32, period: ReportPeriod) -> Self {
        let year_file = years.load_year(year);
        let summary = if year_file.is_empty() {
            None
        } else {
            Some(aggregate(&year_file, period.month()))
        };

        Self {
            year,
            period,
            summary,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let Some(summary) = &self.summary else {
            return format!("No data found for the year {}.\n", self.year);
        };

        let mut output = String::new();

        match self.period {
            ReportPeriod::Month(month) => {
                output.push_str(&format!(
                    "--- Monthly Analysis for {} {} ---\n\n",
                    month_name(month),
                    self.year
                ));
                output.push_str(&format!("Total Entries: {}\n\n", summary.entry_count));
            }
            ReportPeriod::Year => {
                output.push_str(&format!("--- Yearly Analysis for {} ---\n\n", self.year));
                output.push_str(&format!(
                    "Total Days with Entries: {}\n\n",
                    summary.entry_count
                ));
            }
        }

        output.push_str("Financial Summary:\n");
        output.push_str(&format!(
            "  - Total Earned: {}\n",
            format_money(currency, summary.total_earned)
        ));
        output.push_str(&format!(
            "  - Total Spent:  {}\n",
            format_money(currency, summary.total_spent)
        ));
        output.push_str(&format!(
            "  - Net Balance:  {}\n\n",
            format_money(currency, summary.net_balance())
        ));

        output.push_str("Productivity Summary:\n");
        output.push_str(&format!(
            "  - Total Study Time: {} minutes\n",
            summary.total_study_time
        ));
        output.push_str(&format!(
            "  - Total Self-Improvement: {} minutes\n",
            summary.total_improvement_time
        ));
        output.push_str(&format!(
            "  - Combined Total: {} minutes\n",
            summary.combined_productivity()
        ));

        if let Some(juice_days) = summary.juice_days {
            output.push_str("\nHabit Consistency:\n");
            output.push_str(&format!(
                "  - Morning Healthy Juice: {:.1}% ({}/{} days)\n",
                summary.juice_consistency_pct(),
                juice_days,
                summary.entry_count
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> HabitResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Year",
            "Period",
            "Entries",
            "Earned",
            "Spent",
            "Net",
            "Study Minutes",
            "Improvement Minutes",
            "Juice Days",
            "Juice Consistency %",
        ])?;

        let summary = self
            .summary
            .clone()
            .unwrap_or_else(|| Summary::new(self.period.month().is_none()));
        csv.write_record([
            self.year.to_string(),
            self.period.to_string(),
            summary.entry_count.to_string(),
            format!("{:.2}", summary.total_earned),
            format!("{:.2}", summary.total_spent),
            format!("{:.2}", summary.net_balance()),
            summary.total_study_time.to_string(),
            summary.total_improvement_time.to_string(),
            summary
                .juice_days
                .map(|d| d.to_string())
                .unwrap_or_default(),
            summary
                .juice_days
                .map(|_| format!("{:.1}", summary.juice_consistency_pct()))
                .unwrap_or_default(),
        ])?;

        csv.flush()
            .map_err(|e| HabitError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryForm, Field};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (YearStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        (YearStore::new(temp_dir.path().join("data")), temp_dir)
    }

    fn save(store: &YearStore, y: i32, m: u32, d: u32, form: EntryForm) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        store.save_entry(date, form.validate().unwrap()).unwrap();
    }

    #[test]
    fn test_empty_year_message() {
        let (store, _temp) = create_test_store();
        let report = AnalysisReport::generate(&store, 2024, ReportPeriod::Year);

        assert!(report.summary.is_none());
        assert_eq!(report.format_terminal("$"), "No data found for the year 2024.\n");
    }

    #[test]
    fn test_monthly_report_text() {
        let (store, _temp) = create_test_store();
        save(
            &store,
            2024,
            3,
            1,
            EntryForm::cleared()
                .with(Field::MoneyEarned, "100")
                .with(Field::MoneySpent, "40")
                .with(Field::EducationTime, "30"),
        );
        save(
            &store,
            2024,
            3,
            2,
            EntryForm::cleared().with(Field::MoneyEarned, "50"),
        );

        let text = AnalysisReport::generate(&store, 2024, ReportPeriod::Month(3)).format_terminal("$");

        assert!(text.starts_with("--- Monthly Analysis for March 2024 ---"));
        assert!(text.contains("Total Entries: 2"));
        assert!(text.contains("  - Total Earned: $150.00"));
        assert!(text.contains("  - Total Spent:  $40.00"));
        assert!(text.contains("  - Net Balance:  $110.00"));
        assert!(text.contains("  - Total Study Time: 30 minutes"));
        assert!(!text.contains("Habit Consistency"));
    }

    #[test]
    fn test_yearly_report_text() {
        let (store, _temp) = create_test_store();
        for (day, juice) in [(1, "Yes"), (2, "Yes"), (3, "No"), (4, "Yes")] {
            save(
                &store,
                2024,
                1,
                day,
                EntryForm::cleared().with(Field::MorningJuice, juice),
            );
        }

        let text = AnalysisReport::generate(&store, 2024, ReportPeriod::Year).format_terminal("$");

        assert!(text.starts_with("--- Yearly Analysis for 2024 ---"));
        assert!(text.contains("Total Days with Entries: 4"));
        assert!(text.contains("  - Morning Healthy Juice: 75.0% (3/4 days)"));
    }

    #[test]
    fn test_export_csv() {
        let (store, _temp) = create_test_store();
        save(
            &store,
            2024,
            5,
            1,
            EntryForm::cleared()
                .with(Field::MorningJuice, "Yes")
                .with(Field::MoneyEarned, "20.5"),
        );

        let report = AnalysisReport::generate(&store, 2024, ReportPeriod::Year);
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Year,Period,Entries"));
        assert_eq!(lines[1], "2024,All,1,20.50,0.00,20.50,0,0,1,100.0");
    }

    #[test]
    fn test_export_csv_empty_month_leaves_juice_blank() {
        let (store, _temp) = create_test_store();
        let report = AnalysisReport::generate(&store, 1999, ReportPeriod::Month(3));

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1999,March,0,0.00,0.00,0.00,0,0,,"));
    }

    #[test]
    fn test_export_csv_empty_year_counts_juice() {
        let (store, _temp) = create_test_store();
        let report = AnalysisReport::generate(&store, 1999, ReportPeriod::Year);

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1999,All,0,0.00,0.00,0.00,0,0,0,0.0"));
    }
}
