//! Month-by-month breakdown of a year

use std::io::Write;

use chrono::Datelike;
use tracing::warn;

use crate::display::report::{format_bar, format_money, separator};
use crate::error::{HabitError, HabitResult};
use crate::models::YearFile;
use crate::storage::YearStore;

use super::summary::{aggregate, month_name, Summary};

const BAR_WIDTH: usize = 10;

/// Twelve monthly summaries plus the yearly total
#[derive(Debug, Clone)]
pub struct AnnualBreakdown {
    pub year: i32,
    /// Index 0 is January; each month tracks juice days
    pub months: Vec<Summary>,
    pub total: Summary,
}

impl AnnualBreakdown {
    /// Generate the breakdown from stored data
    pub fn generate(years: &YearStore, year: i32) -> Self {
        Self::from_year_file(year, &years.load_year(year))
    }

    /// Build the breakdown in a single pass over the entries
    pub fn from_year_file(year: i32, year_file: &YearFile) -> Self {
        let mut months = vec![Summary::new(true); 12];

        for item in year_file.dated_entries() {
            match item {
                Ok((date, entry)) => months[date.month0() as usize].add(entry),
                Err(key) => warn!(key, "skipping entry with unparseable date key"),
            }
        }

        Self {
            year,
            months,
            total: aggregate(year_file, None),
        }
    }

    /// Format the breakdown as a table
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let width = 96;

        output.push_str(&format!("Monthly Breakdown for {}\n", self.year));
        output.push_str(&"=".repeat(width));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>7} {:>12} {:>12} {:>12} {:>8} {:>8}  {}\n",
            "Month", "Entries", "Earned", "Spent", "Net", "Study", "Improve", "Juice"
        ));
        output.push_str(&separator(width));
        output.push('\n');

        for (index, month) in self.months.iter().enumerate() {
            output.push_str(&self.format_row(month_name(index as u32 + 1), month, currency));
        }

        output.push_str(&separator(width));
        output.push('\n');
        output.push_str(&self.format_row("Total", &self.total, currency));

        output
    }

    fn format_row(&self, label: &str, summary: &Summary, currency: &str) -> String {
        let pct = summary.juice_consistency_pct();
        format!(
            "{:<10} {:>7} {:>12} {:>12} {:>12} {:>8} {:>8}  {} {:>5.1}%\n",
            label,
            summary.entry_count,
            format_money(currency, summary.total_earned),
            format_money(currency, summary.total_spent),
            format_money(currency, summary.net_balance()),
            summary.total_study_time,
            summary.total_improvement_time,
            format_bar(pct, 100.0, BAR_WIDTH),
            pct
        )
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> HabitResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Year",
            "Month",
            "Entries",
            "Earned",
            "Spent",
            "Net",
            "Study Minutes",
            "Improvement Minutes",
            "Juice Days",
        ])?;

        let rows = self
            .months
            .iter()
            .enumerate()
            .map(|(i, s)| (month_name(i as u32 + 1), s))
            .chain(std::iter::once(("Total", &self.total)));

        for (label, summary) in rows {
            csv.write_record([
                self.year.to_string(),
                label.to_string(),
                summary.entry_count.to_string(),
                format!("{:.2}", summary.total_earned),
                format!("{:.2}", summary.total_spent),
                format!("{:.2}", summary.net_balance()),
                summary.total_study_time.to_string(),
                summary.total_improvement_time.to_string(),
                summary.juice_days.unwrap_or(0).to_string(),
            ])?;
        }

        csv.flush()
            .map_err(|e| HabitError::Export(e.to_string()))?;
        Ok(())
    }
}
