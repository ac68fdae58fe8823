use anyhow::Result;
use clap::{Parser, Subcommand};

use habit_tracker::cli::{
    handle_audit_command, handle_export_command, handle_log_command, handle_report_command,
    handle_show_command, AuditArgs, ExportCommands, LogArgs, ReportArgs, ShowArgs,
};
use habit_tracker::config::{paths::HabitPaths, settings::Settings};
use habit_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "habits",
    version,
    about = "Daily habit and personal finance tracker",
    long_about = "Record one entry per day of habit metrics (morning juice, water, \
                  sleep, study time, social media activity) and money earned or \
                  spent, then review monthly and yearly summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record or update the entry for a day
    Log(LogArgs),

    /// Show the stored entry for a day
    Show(ShowArgs),

    /// Monthly or yearly analysis
    Report(ReportArgs),

    /// Export a year of entries
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit(AuditArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    habit_tracker::init_tracing();

    // Initialize paths and settings
    let paths = HabitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Log(args)) => handle_log_command(&storage, args)?,
        Some(Commands::Show(args)) => handle_show_command(&storage, args)?,
        Some(Commands::Report(args)) => handle_report_command(&storage, &settings, args)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit(args)) => handle_audit_command(&storage, args)?,
        Some(Commands::Init) => {
            if storage.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
                println!("Run 'habits config' to see current settings.");
                return Ok(());
            }
            println!("Initializing habit tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'habits log --help' to record your first day.");
        }
        Some(Commands::Config) => {
            println!("Habit Tracker Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Audit enabled:      {}", settings.audit_enabled);
            println!("  Quarantine corrupt: {}", settings.quarantine_corrupt);
            println!();
            let years = storage.years.list_years()?;
            if years.is_empty() {
                println!("No years recorded yet.");
            } else {
                let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
                println!("Years recorded: {}", years.join(", "));
            }
        }
        None => {
            println!("Habit Tracker - daily habits and personal finances");
            println!();
            println!("Run 'habits --help' for usage information.");
        }
    }

    Ok(())
}
