//! Core data models for the expense tracker
//!
//! The two ledger record kinds, the money type they are measured in, and the
//! fixed set of payment methods.

pub mod expense;
pub mod money;
pub mod payment;
pub mod salary;

pub use expense::{ExpenseRecord, RecordValidationError};
pub use money::{Money, MoneyParseError};
pub use payment::{PaymentMatch, PaymentMethod};
pub use salary::SalaryRecord;
