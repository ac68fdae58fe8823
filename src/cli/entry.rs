//! CLI commands for daily entries
//!
//! `log` fills in the day's form and saves it; `show` prints a stored day.

use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

use crate::display::format_entry_details;
use crate::error::HabitResult;
use crate::models::{parse_date, DateSelection, EntryForm, Field};
use crate::services::EntryService;
use crate::storage::Storage;

/// Values for each form field; an empty string blanks the field
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Morning juice habit done (Yes/No)
    #[arg(long, allow_hyphen_values = true)]
    pub juice: Option<String>,

    /// Water intake in litres
    #[arg(long, allow_hyphen_values = true)]
    pub water: Option<String>,

    /// Hours slept
    #[arg(long, allow_hyphen_values = true)]
    pub sleep: Option<String>,

    /// Self improvement time in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub self_improvement: Option<String>,

    /// Education time in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub education: Option<String>,

    /// GitHub commits
    #[arg(long, allow_hyphen_values = true)]
    pub commits: Option<String>,

    /// LinkedIn posts
    #[arg(long, allow_hyphen_values = true)]
    pub linkedin_posts: Option<String>,

    /// LinkedIn time in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub linkedin_time: Option<String>,

    /// Facebook posts
    #[arg(long, allow_hyphen_values = true)]
    pub facebook_posts: Option<String>,

    /// Facebook time in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub facebook_time: Option<String>,

    /// Instagram posts
    #[arg(long, allow_hyphen_values = true)]
    pub instagram_posts: Option<String>,

    /// Instagram time in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub instagram_time: Option<String>,

    /// Money earned
    #[arg(long, allow_hyphen_values = true)]
    pub earned: Option<String>,

    /// Money spent
    #[arg(long, allow_hyphen_values = true)]
    pub spent: Option<String>,

    /// Free-text notes
    #[arg(long, allow_hyphen_values = true)]
    pub notes: Option<String>,
}

impl FieldArgs {
    /// Fields given on the command line with their raw values
    fn overrides(self) -> Vec<(Field, String)> {
        [
            (Field::MorningJuice, self.juice),
            (Field::WaterIntake, self.water),
            (Field::SleepHours, self.sleep),
            (Field::SelfImprovementTime, self.self_improvement),
            (Field::EducationTime, self.education),
            (Field::GithubCommits, self.commits),
            (Field::LinkedinPosts, self.linkedin_posts),
            (Field::LinkedinEngagement, self.linkedin_time),
            (Field::FacebookPosts, self.facebook_posts),
            (Field::FacebookEngagement, self.facebook_time),
            (Field::InstagramPosts, self.instagram_posts),
            (Field::InstagramEngagement, self.instagram_time),
            (Field::MoneyEarned, self.earned),
            (Field::MoneySpent, self.spent),
            (Field::Notes, self.notes),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// Apply the given values on top of `form`
    pub fn apply(self, form: EntryForm) -> EntryForm {
        self.overrides()
            .into_iter()
            .fold(form, |form, (field, value)| form.with(field, value))
    }
}

/// Arguments for `log`
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Date to record (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start from a cleared form instead of the stored entry
    #[arg(long)]
    pub replace: bool,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Arguments for `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Date to show (YYYY-MM-DD, defaults to today)
    #[arg(short, long, conflicts_with_all = ["year", "month", "day"])]
    pub date: Option<String>,

    /// Year of the selection (defaults to this year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month of the selection (defaults to this month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Day of the selection (defaults to today)
    #[arg(long)]
    pub day: Option<u32>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Handle the `log` command
pub fn handle_log_command(storage: &Storage, args: LogArgs) -> HabitResult<()> {
    let service = EntryService::new(storage);
    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => today(),
    };

    let base = if args.replace {
        EntryForm::cleared()
    } else {
        service.form_for_date(date)
    };
    let form = args.fields.apply(base);

    let saved = service.save_form(date, &form)?;

    println!("Data saved for {}.", saved.date.format("%Y-%m-%d"));
    if let Some(changes) = saved.changes {
        println!("Changes: {}", changes);
    }

    Ok(())
}

/// Handle the `show` command
pub fn handle_show_command(storage: &Storage, args: ShowArgs) -> HabitResult<()> {
    let service = EntryService::new(storage);

    let selection = match args.date.as_deref() {
        Some(s) => DateSelection::from_date(parse_date(s)?),
        None => {
            let today = today();
            DateSelection::new(
                args.year.unwrap_or(today.year()),
                args.month.unwrap_or(today.month()),
                args.day.unwrap_or(today.day()),
            )
        }
    };

    let form = service.load_form(selection);
    print!("{}", format_entry_details(selection.resolve(), &form));

    Ok(())
}
