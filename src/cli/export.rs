//! CLI commands for data export
//!
//! Exports one year of entries as CSV or JSON, to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Args, Subcommand};

use crate::error::{HabitError, HabitResult};
use crate::export::{export_year_csv, export_year_json};
use crate::models::YearFile;
use crate::storage::Storage;

/// Which year and where to write it
#[derive(Args, Debug)]
pub struct ExportTarget {
    /// Year to export (defaults to this year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export a year as CSV, one row per day
    Csv(ExportTarget),

    /// Export a year as JSON with metadata
    Json(ExportTarget),

    /// List stored years and their entry counts
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> HabitResult<()> {
    match cmd {
        ExportCommands::Csv(target) => write_export(storage, target, |_, file, mut w| {
            export_year_csv(file, &mut w)
        }),
        ExportCommands::Json(target) => write_export(storage, target, |year, file, mut w| {
            export_year_json(year, file, &mut w)
        }),
        ExportCommands::Info => handle_export_info(storage),
    }
}

fn write_export<F>(storage: &Storage, target: ExportTarget, export: F) -> HabitResult<()>
where
    F: FnOnce(i32, &YearFile, &mut dyn Write) -> HabitResult<()>,
{
    let year = target.year.unwrap_or_else(|| Local::now().year());
    let year_file = storage.years.load_year(year);

    match target.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                HabitError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export(year, &year_file, &mut writer)?;
            writer
                .flush()
                .map_err(|e| HabitError::Export(e.to_string()))?;
            eprintln!(
                "Exported {} entries for {} to: {}",
                year_file.len(),
                year,
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            export(year, &year_file, &mut lock)?;
        }
    }

    Ok(())
}

/// Show what is available to export
fn handle_export_info(storage: &Storage) -> HabitResult<()> {
    let years = storage.years.list_years()?;

    println!("Export Information");
    println!("==================");
    if years.is_empty() {
        println!("No data has been recorded yet.");
        return Ok(());
    }

    for year in years {
        println!("  {}: {} entries", year, storage.years.load_year(year).len());
    }

    Ok(())
}
