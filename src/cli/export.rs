//! CLI command for data export

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::CashflowResult;
use crate::export::{write_export, ExportFormat};
use crate::services::{parse_date_or, AnalysisOverrides, AnalyticsService};
use crate::storage::Storage;

use super::today;

/// Options for `cashflow export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output directory, defaults to the exports folder in the data directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Date the included summary is evaluated at (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Handle `cashflow export`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> CashflowResult<()> {
    let as_of = parse_date_or(args.as_of.as_deref(), today())?;
    let out_dir = args
        .output
        .unwrap_or_else(|| storage.paths().export_dir());

    let summary =
        AnalyticsService::new(storage, settings).summary(as_of, &AnalysisOverrides::default())?;
    let snapshot = storage.snapshot()?;

    println!(
        "Exporting {} incomes and {} expenses as {}...",
        snapshot.incomes.len(),
        snapshot.expenses.len(),
        args.format
    );

    for path in write_export(args.format, snapshot, summary, &out_dir)? {
        println!("  wrote {}", path.display());
    }

    Ok(())
}
