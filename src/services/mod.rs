//! Service layer for the expense tracker
//!
//! The parser turns chat text into records; the services persist them
//! through the ledger and report the resulting balance.

pub mod expense;
pub mod parser;
pub mod salary;

pub use expense::{ExpenseService, RecordedExpense};
pub use parser::{parse_expense, parse_salary_args, ParseError, ParsedExpense};
pub use salary::{RecordedSalary, SalaryService};
