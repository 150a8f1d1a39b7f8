//! Initialization and configuration commands

use std::io::Write;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::storage::{CsvWorkbook, Ledger, LedgerStore, MemoryWorkbook};

/// Open the ledger in the workbook directory, or in memory for a throwaway session
pub fn open_ledger(paths: &TrackerPaths, settings: &Settings, in_memory: bool) -> TrackerResult<Ledger> {
    let store: Box<dyn LedgerStore> = if in_memory {
        Box::new(MemoryWorkbook::new())
    } else {
        Box::new(CsvWorkbook::open(paths.workbook_dir())?)
    };
    Ledger::open(store, settings)
}

/// Create the data directories, persist settings and create both sheets
pub fn initialize<W: Write>(paths: &TrackerPaths, settings: &Settings, output: &mut W) -> TrackerResult<()> {
    writeln!(output, "Initializing expense tracker at: {}", paths.base_dir().display())?;

    paths.ensure_directories()?;
    settings.save(paths)?;
    let ledger = open_ledger(paths, settings, false)?;

    writeln!(output, "Initialization complete!")?;
    writeln!(output)?;
    writeln!(output, "Sheets ready in {}:", paths.workbook_dir().display())?;
    writeln!(output, "  - {}", ledger.expenses_sheet())?;
    writeln!(output, "  - {}", ledger.salary_sheet())?;
    writeln!(output)?;
    writeln!(output, "Run 'expense-bot chat' to start recording expenses.")?;
    Ok(())
}

/// Print resolved paths and settings, then check the workbook can be read
pub fn print_config<W: Write>(paths: &TrackerPaths, settings: &Settings, output: &mut W) -> TrackerResult<()> {
    writeln!(output, "Expense Tracker Configuration")?;
    writeln!(output, "=============================")?;
    writeln!(output, "Data directory:     {}", paths.base_dir().display())?;
    writeln!(output, "Settings file:      {}", paths.settings_file().display())?;
    writeln!(output, "Workbook directory: {}", paths.workbook_dir().display())?;
    writeln!(output, "Outbox directory:   {}", paths.outbox_dir().display())?;
    writeln!(output)?;
    writeln!(output, "Settings:")?;
    writeln!(output, "  Currency symbol:   {}", settings.currency_symbol)?;
    writeln!(output, "  Date format:       {}", settings.display_date_format)?;
    writeln!(output, "  Expenses sheet:    {}", settings.expenses_sheet)?;
    writeln!(output, "  Salary sheet:      {}", settings.salary_sheet)?;
    writeln!(output, "  Salary default:    {}", settings.default_salary_description)?;
    writeln!(output)?;

    if !paths.is_initialized() {
        writeln!(output, "Workbook: not initialized (run 'expense-bot init')")?;
        return Ok(());
    }

    match open_ledger(paths, settings, false).and_then(|ledger| ledger.snapshot()) {
        Ok(snapshot) => writeln!(
            output,
            "Workbook: OK ({} expenses, {} salary entries)",
            snapshot.expenses.len(),
            snapshot.salaries.len()
        )?,
        Err(e) => writeln!(output, "Workbook: unavailable ({})", e)?,
    }
    Ok(())
}
