//! Salary service

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{Money, SalaryRecord};
use crate::storage::Ledger;

use super::expense::current_balance;

/// A salary entry that the store confirmed, with the balance after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSalary {
    pub record: SalaryRecord,
    /// `None` when the ledger could not be read back after the append
    pub balance: Option<Money>,
}

/// Service for recording income
pub struct SalaryService<'a> {
    ledger: &'a Ledger,
    settings: &'a Settings,
}

impl<'a> SalaryService<'a> {
    pub fn new(ledger: &'a Ledger, settings: &'a Settings) -> Self {
        Self { ledger, settings }
    }

    /// Append a salary dated `today`; a missing description uses the default
    pub fn add(
        &self,
        amount: Money,
        description: Option<String>,
        today: NaiveDate,
    ) -> TrackerResult<RecordedSalary> {
        let description =
            description.unwrap_or_else(|| self.settings.default_salary_description.clone());
        let record = SalaryRecord::new(today, amount, description);

        self.ledger.append_salary(&record)?;
        let balance = current_balance(self.ledger);

        Ok(RecordedSalary { record, balance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryWorkbook;
    use crate::TrackerError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_add_salary_with_default_description() {
        let settings = Settings::default();
        let ledger = Ledger::open(Box::new(MemoryWorkbook::new()), &settings).unwrap();
        let service = SalaryService::new(&ledger, &settings);

        let recorded = service.add(Money::from_units(50000), None, today()).unwrap();
        assert_eq!(recorded.record.description, "Monthly Salary");
        assert_eq!(recorded.balance, Some(Money::from_units(50000)));

        let recorded = service
            .add(Money::from_units(500), Some("Bonus".to_string()), today())
            .unwrap();
        assert_eq!(recorded.record.description, "Bonus");
        assert_eq!(recorded.balance, Some(Money::from_units(50500)));
    }

    #[test]
    fn test_non_positive_salary_rejected() {
        let settings = Settings::default();
        let ledger = Ledger::open(Box::new(MemoryWorkbook::new()), &settings).unwrap();
        let err = SalaryService::new(&ledger, &settings)
            .add(Money::zero(), None, today())
            .unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(ledger.salaries().unwrap().is_empty());
    }
}
