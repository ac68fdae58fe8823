//! CSV Export functionality
//!
//! Exports a year's entries to CSV, one row per day, one column per field.

use std::io::Write;

use crate::error::{HabitError, HabitResult};
use crate::models::{Field, YearFile};

/// Export every entry of a year to CSV
pub fn export_year_csv<W: Write>(year_file: &YearFile, writer: &mut W) -> HabitResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let header = std::iter::once("date").chain(Field::ALL.iter().map(|f| f.key()));
    csv.write_record(header)?;

    for (key, entry) in year_file.iter() {
        let values = Field::ALL.iter().map(|f| entry.display_value(*f));
        csv.write_record(std::iter::once(key.to_string()).chain(values))?;
    }

    csv.flush().map_err(|e| HabitError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryForm, Field};
    use chrono::NaiveDate;

    #[test]
    fn test_export_year_csv() {
        let mut year = YearFile::new();
        let entry = EntryForm::cleared()
            .with(Field::MorningJuice, "Yes")
            .with(Field::MoneyEarned, "100")
            .with(Field::Notes, "paid, finally")
            .validate()
            .unwrap();
        year.insert(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), entry);

        let mut buffer = Vec::new();
        export_year_csv(&year, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("date,morning_juice,water_intake"));
        assert!(lines[0].ends_with("money_spent,notes"));
        assert!(lines[1].starts_with("2024-03-01,Yes,"));
        assert!(lines[1].contains(",100,"));
        assert!(lines[1].ends_with("\"paid, finally\""));
    }

    #[test]
    fn test_export_empty_year_writes_header_only() {
        let mut buffer = Vec::new();
        export_year_csv(&YearFile::new(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
