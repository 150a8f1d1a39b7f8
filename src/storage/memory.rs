//! In-memory workbook
//!
//! Same semantics as [`super::CsvWorkbook`] without touching disk. Used for
//! throwaway chat sessions and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};

use super::{validate_sheet_name, zip_record, LedgerStore, SheetHandle, SheetRecord};

#[derive(Debug, Default)]
struct MemorySheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Workbook held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: RwLock<HashMap<String, MemorySheet>>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryWorkbook {
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> TrackerResult<SheetHandle> {
        validate_sheet_name(name)?;
        let mut sheets = self
            .sheets
            .write()
            .map_err(|e| TrackerError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = sheets.get(name) {
            return Ok(SheetHandle {
                name: name.to_string(),
                headers: existing.headers.clone(),
                created: false,
            });
        }

        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        sheets.insert(
            name.to_string(),
            MemorySheet {
                headers: headers.clone(),
                rows: Vec::new(),
            },
        );

        Ok(SheetHandle {
            name: name.to_string(),
            headers,
            created: true,
        })
    }

    fn append(&self, sheet: &str, fields: &[String]) -> TrackerResult<()> {
        let mut sheets = self
            .sheets
            .write()
            .map_err(|e| TrackerError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))?;

        let target = sheets
            .get_mut(sheet)
            .ok_or_else(|| TrackerError::store(sheet, "worksheet not found"))?;

        if target.headers.len() != fields.len() {
            return Err(TrackerError::Validation(format!(
                "Sheet '{}' has {} columns but the row has {}",
                sheet,
                target.headers.len(),
                fields.len()
            )));
        }

        target.rows.push(fields.to_vec());
        Ok(())
    }

    fn read_all(&self, sheet: &str) -> TrackerResult<Vec<SheetRecord>> {
        let sheets = self
            .sheets
            .read()
            .map_err(|e| TrackerError::StoreUnavailable(format!("Failed to acquire read lock: {}", e)))?;

        let target = sheets
            .get(sheet)
            .ok_or_else(|| TrackerError::store(sheet, "worksheet not found"))?;

        Ok(target
            .rows
            .iter()
            .map(|row| zip_record(target.headers.iter().cloned(), row.iter().cloned()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let workbook = MemoryWorkbook::new();
        let handle = workbook.ensure_sheet("Salary", &["Date", "Amount", "Description"]).unwrap();
        assert!(handle.created);

        workbook
            .append(
                "Salary",
                &["2024-05-01".to_string(), "1000.00".to_string(), "Monthly Salary".to_string()],
            )
            .unwrap();

        let records = workbook.read_all("Salary").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Description"], "Monthly Salary");
            }

    #[test]
    fn test_ensure_sheet_keeps_rows() {
        let workbook = MemoryWorkbook::new();
        workbook.ensure_sheet("S", &["A"]).unwrap();
        workbook.append("S", &["1".to_string()]).unwrap();

        let again = workbook.ensure_sheet("S", &["A"]).unwrap();
        assert!(!again.created);
        assert_eq!(workbook.read_all("S").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_sheet() {
        let workbook = MemoryWorkbook::new();
        assert!(workbook.read_all("Missing").unwrap_err().is_store_unavailable());
    }
}
