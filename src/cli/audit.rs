//! CLI command for browsing the audit log

use clap::Args;

use crate::error::CashflowResult;
use crate::storage::Storage;

use super::print_json;

/// Options for `cashflow audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,

    /// Print raw entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `cashflow audit`
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> CashflowResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if args.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
