//! Expense record model
//!
//! One row of the expenses sheet. Records are append-only: once written they
//! are never updated or deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::payment::PaymentMethod;

/// Validation errors for ledger records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveAmount,
    EmptyCategory,
}

impl std::fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    /// Title-cased category label
    pub category: String,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl ExpenseRecord {
    /// Create a new expense paid in cash with no description
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: String::new(),
            payment_method: PaymentMethod::Cash,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount);
        }
        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }
        Ok(())
    }
}
