//! Salary record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::RecordValidationError;
use super::money::Money;

/// A single salary credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub date: NaiveDate,
    pub amount: Money,
    pub description: String,
}

impl SalaryRecord {
    pub fn new(date: NaiveDate, amount: Money, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rejects_negative() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let salary = SalaryRecord::new(date, Money::from_cents(-100), "Monthly Salary");
        assert_eq!(
            salary.validate(),
            Err(RecordValidationError::NonPositiveAmount)
        );
        assert!(SalaryRecord::new(date, Money::from_units(1000), "Bonus")
            .validate()
            .is_ok());
    }
}
