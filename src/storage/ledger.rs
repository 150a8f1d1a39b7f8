//! Typed ledger over a [`LedgerStore`]
//!
//! Owns the column layout of the expense and salary sheets. Records are
//! written in explicit column order and read back by header name, so the
//! in-memory types stay independent of the sheet layout.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseRecord, Money, PaymentMethod, SalaryRecord};

use super::{LedgerStore, SheetHandle, SheetRecord};

/// Column layout of the expenses sheet
pub const EXPENSE_HEADERS: [&str; 5] = ["Date", "Category", "Amount", "Description", "Payment Method"];

/// Column layout of the salary sheet
pub const SALARY_HEADERS: [&str; 3] = ["Date", "Amount", "Description"];

/// Amount header used by sheets created before the columns were renamed
const LEGACY_AMOUNT_HEADER: &str = "Amount (₹)";

/// Storage format of the Date column
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Every record in the ledger at the time of one full read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub expenses: Vec<ExpenseRecord>,
    pub salaries: Vec<SalaryRecord>,
}

/// The expense and salary sheets of one store
pub struct Ledger {
    store: Box<dyn LedgerStore>,
    expenses_sheet: String,
    salary_sheet: String,
}

impl Ledger {
    /// Open the ledger, creating either sheet if it is missing
    pub fn open(store: Box<dyn LedgerStore>, settings: &Settings) -> TrackerResult<Self> {
        let expenses = store.ensure_sheet(&settings.expenses_sheet, &EXPENSE_HEADERS)?;
        check_layout(&expenses, &EXPENSE_HEADERS);

        let salary = store.ensure_sheet(&settings.salary_sheet, &SALARY_HEADERS)?;
        check_layout(&salary, &SALARY_HEADERS);

        Ok(Self {
            store,
            expenses_sheet: settings.expenses_sheet.clone(),
            salary_sheet: settings.salary_sheet.clone(),
        })
    }

    pub fn expenses_sheet(&self) -> &str {
        &self.expenses_sheet
    }

    pub fn salary_sheet(&self) -> &str {
        &self.salary_sheet
    }

    /// Append one expense row
    pub fn append_expense(&self, expense: &ExpenseRecord) -> TrackerResult<()> {
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.store
            .append(&self.expenses_sheet, &expense_to_row(expense))?;

        info!(
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            payment = %expense.payment_method,
            "Recorded expense"
        );
        Ok(())
    }

    /// Append one salary row
    pub fn append_salary(&self, salary: &SalaryRecord) -> TrackerResult<()> {
        salary
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.store.append(&self.salary_sheet, &salary_to_row(salary))?;

        info!(date = %salary.date, amount = %salary.amount, "Recorded salary");
        Ok(())
    }

    /// Read every expense, skipping rows that cannot be decoded
    pub fn expenses(&self) -> TrackerResult<Vec<ExpenseRecord>> {
        let rows = self.store.read_all(&self.expenses_sheet)?;
        Ok(decode_rows(&self.expenses_sheet, rows, expense_from_row))
    }

    /// Read every salary entry, skipping rows that cannot be decoded
    pub fn salaries(&self) -> TrackerResult<Vec<SalaryRecord>> {
        let rows = self.store.read_all(&self.salary_sheet)?;
        Ok(decode_rows(&self.salary_sheet, rows, salary_from_row))
    }

    /// Read both sheets in full
    pub fn snapshot(&self) -> TrackerResult<LedgerSnapshot> {
        Ok(LedgerSnapshot {
            expenses: self.expenses()?,
            salaries: self.salaries()?,
        })
    }
}

fn check_layout(handle: &SheetHandle, expected: &[&str]) {
    let matches = handle.headers.len() == expected.len()
        && handle
            .headers
            .iter()
            .zip(expected)
            .all(|(found, want)| canonical_header(found) == *want);

    if !matches {
        warn!(
            sheet = %handle.name,
            found = ?handle.headers,
            expected = ?expected,
            "Worksheet columns differ from the expected layout"
        );
    }
}

fn canonical_header(header: &str) -> &str {
    let header = header.trim();
    if header == LEGACY_AMOUNT_HEADER {
        "Amount"
    } else {
        header
    }
}

fn decode_rows<T>(
    sheet: &str,
    rows: Vec<SheetRecord>,
    decode: fn(&SheetRecord) -> Result<T, String>,
) -> Vec<T> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| match decode(row) {
            Ok(record) => Some(record),
            Err(reason) => {
                // +2: one for the header row, one for 1-based numbering
                warn!(sheet, row = index + 2, %reason, "Skipping malformed ledger row");
                None
            }
        })
        .collect()
}

/// Serialize an expense in sheet column order
pub fn expense_to_row(expense: &ExpenseRecord) -> Vec<String> {
    vec![
        expense.date.format(DATE_FORMAT).to_string(),
        expense.category.clone(),
        expense.amount.to_string(),
        expense.description.clone(),
        expense.payment_method.name().to_string(),
    ]
}

/// Serialize a salary entry in sheet column order
pub fn salary_to_row(salary: &SalaryRecord) -> Vec<String> {
    vec![
        salary.date.format(DATE_FORMAT).to_string(),
        salary.amount.to_string(),
        salary.description.clone(),
    ]
}

/// Decode an expense row; unknown payment methods read back as Other
pub fn expense_from_row(row: &SheetRecord) -> Result<ExpenseRecord, String> {
    let date = date_cell(row)?;
    let amount = amount_cell(row)?;
    let category = cell(row, "Category").trim().to_string();
    if category.is_empty() {
        return Err("missing category".into());
    }

    let payment_method = PaymentMethod::match_phrase(cell(row, "Payment Method")).resolve();

    Ok(ExpenseRecord {
        date,
        category,
        amount,
        description: cell(row, "Description").to_string(),
        payment_method,
    })
}

/// Decode a salary row
pub fn salary_from_row(row: &SheetRecord) -> Result<SalaryRecord, String> {
    Ok(SalaryRecord {
        date: date_cell(row)?,
        amount: amount_cell(row)?,
        description: cell(row, "Description").to_string(),
    })
}

fn cell<'a>(row: &'a SheetRecord, header: &str) -> &'a str {
    row.get(header).map(String::as_str).unwrap_or("")
}

fn date_cell(row: &SheetRecord) -> Result<NaiveDate, String> {
    let raw = cell(row, "Date").trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| format!("bad date '{}'", raw))
}

fn amount_cell(row: &SheetRecord) -> Result<Money, String> {
    let raw = row
        .get("Amount")
        .or_else(|| row.get(LEGACY_AMOUNT_HEADER))
        .map(String::as_str)
        .unwrap_or("")
        .trim();
    Money::parse(raw)
        .ok()
        .filter(Money::is_valid_entry)
        .ok_or_else(|| format!("bad amount '{}'", raw))
}
