//! JSON export of every record plus the current summary
//!
//! The export is self-describing: schema version, timestamp and app version
//! sit next to the data.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::analytics::{AnalyticsSummary, RecordSnapshot};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Expense, Income};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    /// Analysis of the exported records
    pub summary: AnalyticsSummary,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub earliest_record: Option<NaiveDate>,
    pub latest_record: Option<NaiveDate>,
}

impl FullExport {
    pub fn new(snapshot: RecordSnapshot, summary: AnalyticsSummary) -> Self {
        let dates = || {
            snapshot
                .incomes
                .iter()
                .map(|i| i.date)
                .chain(snapshot.expenses.iter().map(|e| e.date))
        };

        let metadata = ExportMetadata {
            income_count: snapshot.incomes.len(),
            expense_count: snapshot.expenses.len(),
            earliest_record: dates().min(),
            latest_record: dates().max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            incomes: snapshot.incomes,
            expenses: snapshot.expenses,
            summary,
            metadata,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_full_json<W: Write>(export: &FullExport, writer: &mut W) -> CashflowResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}
