//! CLI commands for reports

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Args;

use crate::config::settings::Settings;
use crate::error::{HabitError, HabitResult};
use crate::reports::{month_name, AnalysisReport, AnnualBreakdown, ReportPeriod};
use crate::storage::Storage;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Year to analyse (defaults to this year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// "All", a month name or 1-12 (defaults to this month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Show a month-by-month table for the year instead
    #[arg(short, long, conflicts_with = "month")]
    pub breakdown: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `report` command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> HabitResult<()> {
    let today = Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());
    let currency = settings.currency_symbol.as_str();

    if args.breakdown {
        let breakdown = AnnualBreakdown::generate(&storage.years, year);
        return match args.output {
            Some(path) => {
                breakdown.export_csv(&mut create_output(&path)?)?;
                println!("Breakdown exported to: {}", path.display());
                Ok(())
            }
            None => {
                print!("{}", breakdown.format_terminal(currency));
                Ok(())
            }
        };
    }

    let period: ReportPeriod = match args.month.as_deref() {
        Some(m) => m.parse()?,
        None => month_name(today.month()).parse()?,
    };

    let report = AnalysisReport::generate(&storage.years, year, period);

    match args.output {
        Some(path) => {
            report.export_csv(&mut create_output(&path)?)?;
            println!("Report exported to: {}", path.display());
        }
        None => print!("{}", report.format_terminal(currency)),
    }

    Ok(())
}

fn create_output(path: &PathBuf) -> HabitResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        HabitError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
