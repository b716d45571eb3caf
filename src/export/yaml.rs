//! YAML export, the human-readable twin of the JSON export

use std::io::Write;

use crate::error::{CashflowError, CashflowResult};
use crate::export::json::FullExport;

/// Write the export as YAML with a short comment header
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> CashflowResult<()> {
    let header = format!(
        "# Cashflow Scanner export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| CashflowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}
