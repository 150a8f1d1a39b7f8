//! Time windows for scoping aggregations

use chrono::{Datelike, NaiveDate};

use crate::models::{ExpenseRecord, Money, SalaryRecord};

/// A time-scoping filter applied before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    /// Only the reference date itself
    Today,
    /// Same calendar year and month as the reference date
    CurrentMonth,
    /// Same calendar year as the reference date
    CurrentYear,
    /// Every record regardless of date
    AllTime,
}

impl Window {
    /// Whether `date` falls in this window relative to `reference`
    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Today => date == reference,
            Self::CurrentMonth => date.year() == reference.year() && date.month() == reference.month(),
            Self::CurrentYear => date.year() == reference.year(),
            Self::AllTime => true,
        }
    }

    /// Human label such as "May 2024" or "2024"
    pub fn label(&self, reference: NaiveDate) -> String {
        match self {
            Self::Today => reference.format("%d %b %Y").to_string(),
            Self::CurrentMonth => reference.format("%B %Y").to_string(),
            Self::CurrentYear => reference.year().to_string(),
            Self::AllTime => "All time".to_string(),
        }
    }
}

/// A ledger entry with a date and an amount
pub trait Dated {
    fn date(&self) -> NaiveDate;
    fn amount(&self) -> Money;
}

impl Dated for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

impl Dated for SalaryRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains() {
        let reference = date(2024, 5, 15);

        assert!(Window::Today.contains(date(2024, 5, 15), reference));
        assert!(!Window::Today.contains(date(2024, 5, 14), reference));

        assert!(Window::CurrentMonth.contains(date(2024, 5, 1), reference));
        assert!(!Window::CurrentMonth.contains(date(2023, 5, 15), reference));

        assert!(Window::CurrentYear.contains(date(2024, 12, 31), reference));
        assert!(!Window::CurrentYear.contains(date(2025, 1, 1), reference));

        assert!(Window::AllTime.contains(date(1999, 1, 1), reference));
    }

    #[test]
    fn test_labels() {
        let reference = date(2024, 5, 15);
        assert_eq!(Window::CurrentMonth.label(reference), "May 2024");
        assert_eq!(Window::CurrentYear.label(reference), "2024");
    }
}
