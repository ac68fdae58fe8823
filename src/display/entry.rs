//! Daily entry display formatting
//!
//! Formats one day's form grouped into the same sections as the data-entry
//! form: finance, health, productivity, social media and notes.

use chrono::NaiveDate;

use crate::models::{EntryForm, Field};

const SECTIONS: [(&str, &[Field]); 5] = [
    ("Finance", &[Field::MoneyEarned, Field::MoneySpent]),
    (
        "Health & Routine",
        &[Field::MorningJuice, Field::WaterIntake, Field::SleepHours],
    ),
    (
        "Productivity",
        &[
            Field::SelfImprovementTime,
            Field::EducationTime,
            Field::GithubCommits,
        ],
    ),
    (
        "Social Media",
        &[
            Field::LinkedinPosts,
            Field::LinkedinEngagement,
            Field::FacebookPosts,
            Field::FacebookEngagement,
            Field::InstagramPosts,
            Field::InstagramEngagement,
        ],
    ),
    ("Notes", &[Field::Notes]),
];

/// Format a day's form for terminal display
///
/// `date` is `None` when the selection was not a real calendar date.
pub fn format_entry_details(date: Option<NaiveDate>, form: &EntryForm) -> String {
    let mut output = String::new();

    match date {
        Some(date) => output.push_str(&format!("Entry for {}\n", date.format("%Y-%m-%d (%A)"))),
        None => output.push_str("Entry for invalid date (form cleared)\n"),
    }
    output.push_str(&"=".repeat(40));
    output.push('\n');

    let label_width = Field::ALL
        .iter()
        .map(|f| label_with_unit(*f).len())
        .max()
        .unwrap_or(0);

    for (title, fields) in SECTIONS {
        output.push_str(&format!("\n{}\n", title));
        for field in fields {
            let value = form.get(*field);
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                label_with_unit(*field),
                if value.is_empty() { "-" } else { value },
                width = label_width
            ));
        }
    }

    output
}

fn label_with_unit(field: Field) -> String {
    match field.unit() {
        Some(unit) => format!("{} ({})", field.label(), unit),
        None => field.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_details() {
        let form = EntryForm::cleared()
            .with(Field::MorningJuice, "Yes")
            .with(Field::WaterIntake, "2.5")
            .with(Field::Notes, "long run");
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);

        let text = format_entry_details(date, &form);

        assert!(text.starts_with("Entry for 2024-03-01 (Friday)"));
        assert!(text.contains("Water Intake (L)"));
        assert!(text.contains("2.5"));
        assert!(text.contains("long run"));
        assert!(text.contains("Social Media"));
    }

    #[test]
    fn test_blank_fields_show_dash() {
        let text = format_entry_details(None, &EntryForm::cleared());
        assert!(text.contains("invalid date"));
        assert!(text.lines().any(|l| l.trim_start().starts_with("Money Spent") && l.ends_with('-')));
    }

    #[test]
    fn test_every_field_is_in_a_section() {
        let listed: usize = SECTIONS.iter().map(|(_, fields)| fields.len()).sum();
        assert_eq!(listed, Field::ALL.len());
    }
}
