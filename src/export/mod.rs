//! Export of records and the current summary
//!
//! - CSV: one file per record type, spreadsheet friendly
//! - JSON / YAML: a single self-describing snapshot including the summary

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use self::csv::{export_expenses_csv, export_incomes_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

use crate::analytics::{AnalyticsSummary, RecordSnapshot};
use crate::error::{CashflowError, CashflowResult};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Two CSV files, one per record type
    #[default]
    Csv,
    /// Single JSON snapshot with the summary
    Json,
    /// Single YAML snapshot with the summary
    #[value(alias = "yml")]
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CashflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(CashflowError::Validation(format!(
                "Unknown export format '{}'. Use csv, json or yaml",
                other
            ))),
        }
    }
}

fn create_file(path: &Path) -> CashflowResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        CashflowError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn flush(writer: &mut BufWriter<File>, path: &Path) -> CashflowResult<()> {
    writer
        .flush()
        .map_err(|e| CashflowError::Export(format!("Failed to write {}: {}", path.display(), e)))
}

/// Write an export into `out_dir`, returning the files created
///
/// CSV produces `incomes.csv` and `expenses.csv`; JSON and YAML produce a
/// single `cashflow-export.{json,yaml}`.
pub fn write_export(
    format: ExportFormat,
    snapshot: RecordSnapshot,
    summary: AnalyticsSummary,
    out_dir: &Path,
) -> CashflowResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| {
        CashflowError::Export(format!("Failed to create {}: {}", out_dir.display(), e))
    })?;

    let written = match format {
        ExportFormat::Csv => {
            let incomes_path = out_dir.join("incomes.csv");
            export_incomes_csv(&snapshot.incomes, create_file(&incomes_path)?)?;
            let expenses_path = out_dir.join("expenses.csv");
            export_expenses_csv(&snapshot.expenses, create_file(&expenses_path)?)?;
            vec![incomes_path, expenses_path]
        }
        ExportFormat::Json => {
            let path = out_dir.join("cashflow-export.json");
            let mut writer = create_file(&path)?;
            export_full_json(&FullExport::new(snapshot, summary), &mut writer)?;
            flush(&mut writer, &path)?;
            vec![path]
        }
        ExportFormat::Yaml => {
            let path = out_dir.join("cashflow-export.yaml");
            let mut writer = create_file(&path)?;
            export_full_yaml(&FullExport::new(snapshot, summary), &mut writer)?;
            flush(&mut writer, &path)?;
            vec![path]
        }
    };

    tracing::info!(%format, files = written.len(), dir = %out_dir.display(), "export written");
    Ok(written)
}
