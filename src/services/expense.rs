//! Expense service
//!
//! Parse a chat message, append it to the ledger and recompute the balance.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{ExpenseRecord, Money};
use crate::reports::compute_balance;
use crate::storage::Ledger;

use super::parser::parse_expense;

/// An expense that the store confirmed, with the balance after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedExpense {
    pub record: ExpenseRecord,
    /// `None` when the ledger could not be read back after the append
    pub balance: Option<Money>,
    /// The payment phrase that fell back to Other, if any
    pub unrecognized_payment: Option<String>,
}

/// Service for recording expenses
pub struct ExpenseService<'a> {
    ledger: &'a Ledger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Record one expense message
    ///
    /// Nothing is appended when parsing fails. The balance is read back from
    /// the store after the append, so it includes the new row. A failed
    /// read-back does not fail the call: the row is already persisted.
    pub fn record(&self, text: &str, today: NaiveDate) -> TrackerResult<RecordedExpense> {
        let parsed = parse_expense(text, today)?;
        let record = parsed.to_record();

        self.ledger.append_expense(&record)?;

        let balance = current_balance(self.ledger);

        Ok(RecordedExpense {
            record,
            balance,
            unrecognized_payment: parsed.unrecognized_payment,
        })
    }
}

/// Balance after a confirmed append, or `None` if it cannot be computed
pub(crate) fn current_balance(ledger: &Ledger) -> Option<Money> {
    match ledger.snapshot().and_then(|snapshot| compute_balance(&snapshot)) {
        Ok(balance) => {
            debug!(balance = %balance, "Balance after append");
            Some(balance)
        }
        Err(e) => {
            warn!(error = %e, "Record saved but the balance could not be computed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{PaymentMethod, SalaryRecord};
    use crate::services::parser::ParseError;
    use crate::storage::MemoryWorkbook;
    use crate::TrackerError;

    fn ledger() -> Ledger {
        Ledger::open(Box::new(MemoryWorkbook::new()), &Settings::default()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_record_expense() {
        let ledger = ledger();
        ledger
            .append_salary(&SalaryRecord::new(today(), Money::from_units(1000), "Pay"))
            .unwrap();

        let service = ExpenseService::new(&ledger);
        let recorded = service.record("food 250 lunch via UPI", today()).unwrap();

        assert_eq!(recorded.record.category, "Food");
        assert_eq!(recorded.record.payment_method, PaymentMethod::Upi);
        assert_eq!(recorded.balance, Some(Money::from_units(750)));
        assert_eq!(recorded.unrecognized_payment, None);
        assert_eq!(ledger.expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_payment_is_reported() {
        let ledger = ledger();
        let recorded = ExpenseService::new(&ledger)
            .record("misc 10 via crypto wallet", today())
            .unwrap();
        assert_eq!(recorded.record.payment_method, PaymentMethod::Other);
        assert_eq!(recorded.unrecognized_payment.as_deref(), Some("crypto wallet"));
    }

    #[test]
    fn test_parse_failure_appends_nothing() {
        let ledger = ledger();
        let err = ExpenseService::new(&ledger)
            .record("food abc", today())
            .unwrap_err();
        assert!(matches!(err, TrackerError::Parse(ParseError::InvalidAmount)));
        assert!(ledger.expenses().unwrap().is_empty());
    }
}
