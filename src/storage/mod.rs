//! Storage layer for the expense tracker
//!
//! The ledger lives in an append-only, spreadsheet-like store: named sheets,
//! a header row, and rows of text cells. [`LedgerStore`] is the narrow
//! interface to that store; [`Ledger`] maps typed records onto it.

pub mod ledger;
pub mod memory;
pub mod workbook;

pub use ledger::{Ledger, LedgerSnapshot, EXPENSE_HEADERS, SALARY_HEADERS};
pub use memory::MemoryWorkbook;
pub use workbook::CsvWorkbook;

use std::collections::HashMap;

use crate::error::TrackerResult;

/// One row read back from a sheet, keyed by column header
pub type SheetRecord = HashMap<String, String>;

/// Result of [`LedgerStore::ensure_sheet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHandle {
    pub name: String,
    /// Header row as stored, which may predate the current column names
    pub headers: Vec<String>,
    /// Whether this call created the sheet
    pub created: bool,
}

/// Append-only tabular store holding the ledger sheets
pub trait LedgerStore: Send + Sync {
    /// Reuse the named sheet if it exists, otherwise create it with `headers`
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> TrackerResult<SheetHandle>;

    /// Append one row. The row is persisted only if this returns `Ok`.
    fn append(&self, sheet: &str, fields: &[String]) -> TrackerResult<()>;

    /// Read every data row of a sheet
    fn read_all(&self, sheet: &str) -> TrackerResult<Vec<SheetRecord>>;
}

/// Build a keyed record from a header row and a data row
///
/// Short rows simply lack the trailing keys.
pub(crate) fn zip_record<H, V>(headers: H, values: V) -> SheetRecord
where
    H: IntoIterator,
    H::Item: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    headers
        .into_iter()
        .zip(values)
        .map(|(h, v)| (h.into(), v.into()))
        .collect()
}

/// Sheet names become file names, so keep them to a single path component
pub(crate) fn validate_sheet_name(name: &str) -> TrackerResult<()> {
    if name.trim().is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(crate::error::TrackerError::Validation(format!(
            "Invalid sheet name: '{}'",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_record_short_row() {
        let record = zip_record(["Date", "Amount", "Description"], ["2024-05-01", "10"]);
        assert_eq!(record.len(), 2);
        assert_eq!(record["Amount"], "10");
        assert!(!record.contains_key("Description"));
    }

    #[test]
    fn test_validate_sheet_name() {
        assert!(validate_sheet_name("Expenses").is_ok());
        assert!(validate_sheet_name("../etc").is_err());
        assert!(validate_sheet_name("").is_err());
    }
}
