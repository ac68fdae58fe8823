//! CLI command for viewing the audit log

use clap::Args;

use crate::error::HabitResult;
use crate::storage::Storage;

/// Arguments for `audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle the `audit` command
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> HabitResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    println!("Audit Log (last {} entries)", entries.len());
    println!("{}", "=".repeat(40));
    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
