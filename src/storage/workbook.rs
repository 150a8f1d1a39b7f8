//! CSV-backed workbook
//!
//! Each sheet is a `<name>.csv` file in the workbook directory, with the
//! header row first. Appends open the file in append mode and write a single
//! record, so a row is either fully written or not at all.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};

use super::{validate_sheet_name, zip_record, LedgerStore, SheetHandle, SheetRecord};

/// A directory of CSV sheets
pub struct CsvWorkbook {
    dir: PathBuf,
    /// Serializes sheet creation and appends within this process
    write_lock: Mutex<()>,
}

impl CsvWorkbook {
    /// Open (creating if needed) a workbook directory
    pub fn open(dir: impl Into<PathBuf>) -> TrackerResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            TrackerError::StoreUnavailable(format!(
                "Failed to create workbook directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the file backing a sheet
    pub fn sheet_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", name))
    }

    fn existing_sheet_path(&self, name: &str) -> TrackerResult<PathBuf> {
        validate_sheet_name(name)?;
        let path = self.sheet_path(name);
        if !path.exists() {
            return Err(TrackerError::store(name, "worksheet not found"));
        }
        Ok(path)
    }

    fn lock(&self) -> TrackerResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| TrackerError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))
    }
}

fn read_headers(name: &str, path: &Path) -> TrackerResult<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TrackerError::store(name, e))?;
    let headers = reader.headers().map_err(|e| TrackerError::store(name, e))?;
    Ok(headers.iter().map(str::to_string).collect())
}

impl LedgerStore for CsvWorkbook {
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> TrackerResult<SheetHandle> {
        validate_sheet_name(name)?;
        let _guard = self.lock()?;
        let path = self.sheet_path(name);

        if path.exists() {
            let existing = read_headers(name, &path)?;
            info!(sheet = name, "Using existing worksheet");
            return Ok(SheetHandle {
                name: name.to_string(),
                headers: existing,
                created: false,
            });
        }

        let mut writer = csv::Writer::from_path(&path).map_err(|e| TrackerError::store(name, e))?;
        writer
            .write_record(headers)
            .map_err(|e| TrackerError::store(name, e))?;
        writer.flush().map_err(|e| TrackerError::store(name, e))?;

        info!(sheet = name, path = %path.display(), "Created new worksheet");
        Ok(SheetHandle {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            created: true,
        })
    }

    fn append(&self, sheet: &str, fields: &[String]) -> TrackerResult<()> {
        let path = self.existing_sheet_path(sheet)?;
        let _guard = self.lock()?;

        let headers = read_headers(sheet, &path)?;
        if headers.len() != fields.len() {
            return Err(TrackerError::Validation(format!(
                "Sheet '{}' has {} columns but the row has {}",
                sheet,
                headers.len(),
                fields.len()
            )));
        }

        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| TrackerError::store(sheet, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(fields)
            .map_err(|e| TrackerError::store(sheet, e))?;
        writer.flush().map_err(|e| TrackerError::store(sheet, e))?;

        debug!(sheet, "Appended row");
        Ok(())
    }

    fn read_all(&self, sheet: &str) -> TrackerResult<Vec<SheetRecord>> {
        let path = self.existing_sheet_path(sheet)?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|e| TrackerError::store(sheet, e))?;

        let headers = reader
            .headers()
            .map_err(|e| TrackerError::store(sheet, e))?
            .clone();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| TrackerError::store(sheet, e))?;
            records.push(zip_record(headers.iter(), row.iter()));
        }

        Ok(records)
    }
}
