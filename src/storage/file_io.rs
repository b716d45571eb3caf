//! File I/O utilities with atomic writes
//!
//! A record file is always replaced as a whole: written to a temp file in the
//! same directory, synced, then renamed over the original.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CashflowError;

fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> CashflowError {
    CashflowError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read a record file, or `T::default()` when it does not exist yet
///
/// An existing but unreadable or malformed file is an error, never an empty
/// default.
pub fn read_json<T, P>(path: P) -> Result<T, CashflowError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a record file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CashflowError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // Same directory, so the rename cannot cross filesystems
    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path).map_err(|e| storage_error("create", &temp_path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", path, e))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| storage_error("write", &temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("replace", path, e));
    }

    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Income, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    type TestData = Vec<Income>;

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = vec![Income::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "Salary",
            Money::from_cents(5_000_000),
        )];

        write_json_atomic(&path, &data).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(CashflowError::Storage(_))));
    }
}
