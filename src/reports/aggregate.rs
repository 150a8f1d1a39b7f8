//! Ledger aggregation
//!
//! Balance, windowed filtering and per-key sums over the full record set.
//! Every function here works on records already read from the store; nothing
//! is cached between calls.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseRecord, Money};
use crate::storage::LedgerSnapshot;

use super::window::{Dated, Window};

/// Summed amount per group key (category name or payment method)
pub type Grouping = BTreeMap<String, Money>;

/// Salary minus expenses over the whole ledger
///
/// Always all-time, whatever window a report is displaying. Totals that do
/// not fit in [`Money`] are an error, never a wrapped or clamped balance.
pub fn compute_balance(snapshot: &LedgerSnapshot) -> TrackerResult<Money> {
    let income = Money::checked_sum(snapshot.salaries.iter().map(|s| s.amount));
    let spent = Money::checked_sum(snapshot.expenses.iter().map(|e| e.amount));

    income
        .zip(spent)
        .and_then(|(income, spent)| income.checked_sub(spent))
        .ok_or_else(|| TrackerError::Validation("Ledger totals exceed the supported range".into()))
}

/// Records whose date falls in `window`
pub fn filter_by_window<R: Dated>(records: &[R], window: Window, reference: NaiveDate) -> Vec<&R> {
    records
        .iter()
        .filter(|r| window.contains(r.date(), reference))
        .collect()
}

/// Sum of the amounts of records in `window`
pub fn total_in_window<R: Dated>(records: &[R], window: Window, reference: NaiveDate) -> Money {
    filter_by_window(records, window, reference)
        .into_iter()
        .map(Dated::amount)
        .sum()
}

/// Sum expenses in `window` under the key chosen by `key`
pub fn group_by<F>(
    expenses: &[ExpenseRecord],
    window: Window,
    reference: NaiveDate,
    key: F,
) -> Grouping
where
    F: Fn(&ExpenseRecord) -> String,
{
    let mut grouping = Grouping::new();
    for expense in filter_by_window(expenses, window, reference) {
        *grouping.entry(key(expense)).or_insert_with(Money::zero) += expense.amount;
    }
    grouping
}

pub fn group_by_category(expenses: &[ExpenseRecord], window: Window, reference: NaiveDate) -> Grouping {
    group_by(expenses, window, reference, |e| e.category.clone())
}

pub fn group_by_payment_method(
    expenses: &[ExpenseRecord],
    window: Window,
    reference: NaiveDate,
) -> Grouping {
    group_by(expenses, window, reference, |e| e.payment_method.name().to_string())
}

/// Total of a grouping
pub fn grouping_total(grouping: &Grouping) -> Money {
    grouping.values().copied().sum()
}

/// Entries ordered by amount, largest first
pub fn sorted_by_amount(grouping: &Grouping) -> Vec<(&str, Money)> {
    let mut entries: Vec<_> = grouping.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaymentMethod, SalaryRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(d: NaiveDate, category: &str, units: i64, method: PaymentMethod) -> ExpenseRecord {
        ExpenseRecord::new(d, category, Money::from_units(units)).with_payment_method(method)
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            expense(date(2024, 5, 15), "Food", 250, PaymentMethod::Cash),
            expense(date(2024, 5, 10), "Food", 100, PaymentMethod::Upi),
            expense(date(2024, 5, 15), "Travel", 40, PaymentMethod::Upi),
            expense(date(2024, 2, 1), "Rent", 5000, PaymentMethod::BankTransfer),
            expense(date(2023, 12, 31), "Food", 75, PaymentMethod::Card),
        ]
    }

    #[test]
    fn test_balance_empty_ledger() {
        assert_eq!(compute_balance(&LedgerSnapshot::default()).unwrap(), Money::zero());
    }

    #[test]
    fn test_balance() {
        let snapshot = LedgerSnapshot {
            salaries: vec![SalaryRecord::new(date(2024, 5, 1), Money::from_units(1000), "Pay")],
            expenses: vec![
                expense(date(2024, 5, 2), "Food", 250, PaymentMethod::Cash),
                expense(date(2023, 1, 2), "Food", 100, PaymentMethod::Cash),
            ],
        };
        assert_eq!(compute_balance(&snapshot).unwrap(), Money::from_units(650));
    }

    #[test]
    fn test_balance_overflow_is_an_error() {
        let huge = |d| ExpenseRecord::new(date(2024, 5, d), "Rent", Money::from_cents(i64::MAX - 10));
        let snapshot = LedgerSnapshot {
            salaries: Vec::new(),
            expenses: vec![huge(1), huge(2)],
        };
        let err = compute_balance(&snapshot).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        let single = LedgerSnapshot {
            salaries: Vec::new(),
            expenses: vec![huge(1)],
        };
        assert_eq!(
            compute_balance(&single).unwrap(),
            Money::from_cents(-(i64::MAX - 10))
        );
    }

    #[test]
    fn test_group_by_category_per_window() {
        let reference = date(2024, 5, 15);
        let records = sample();

        let today = group_by_category(&records, Window::Today, reference);
        assert_eq!(today.len(), 2);
        assert_eq!(today["Food"], Money::from_units(250));

        let month = group_by_category(&records, Window::CurrentMonth, reference);
        assert_eq!(month["Food"], Money::from_units(350));
        assert_eq!(month["Travel"], Money::from_units(40));
        assert!(!month.contains_key("Rent"));

        let year = group_by_category(&records, Window::CurrentYear, reference);
        assert_eq!(year["Rent"], Money::from_units(5000));
        assert_eq!(year["Food"], Money::from_units(350));

        let all = group_by_category(&records, Window::AllTime, reference);
        assert_eq!(all["Food"], Money::from_units(425));
        assert_eq!(grouping_total(&all), total_in_window(&records, Window::AllTime, reference));
    }

    #[test]
    fn test_grouping_sums_match_filtered_totals() {
        let reference = date(2024, 5, 15);
        let records = sample();
        for window in [Window::Today, Window::CurrentMonth, Window::CurrentYear, Window::AllTime] {
            let by_category = group_by_category(&records, window, reference);
            let by_method = group_by_payment_method(&records, window, reference);
            let expected = total_in_window(&records, window, reference);
            assert_eq!(grouping_total(&by_category), expected);
            assert_eq!(grouping_total(&by_method), expected);
        }
    }

    #[test]
    fn test_grouping_is_order_independent() {
        let reference = date(2024, 5, 15);
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(
            group_by_category(&records, Window::AllTime, reference),
            group_by_category(&reversed, Window::AllTime, reference)
        );
    }

    #[test]
    fn test_group_by_payment_method() {
        let grouping = group_by_payment_method(&sample(), Window::AllTime, date(2024, 5, 15));
        assert_eq!(grouping["UPI"], Money::from_units(140));
        assert_eq!(grouping["Bank Transfer"], Money::from_units(5000));
    }

    #[test]
    fn test_empty_input() {
        let reference = date(2024, 5, 15);
        assert!(group_by_category(&[], Window::AllTime, reference).is_empty());
        assert!(filter_by_window::<ExpenseRecord>(&[], Window::Today, reference).is_empty());
        assert_eq!(
            total_in_window::<ExpenseRecord>(&[], Window::CurrentYear, reference),
            Money::zero()
        );
    }

    #[test]
    fn test_sorted_by_amount() {
        let grouping = group_by_category(&sample(), Window::AllTime, date(2024, 5, 15));
        let sorted = sorted_by_amount(&grouping);
        assert_eq!(sorted[0].0, "Rent");
        assert_eq!(sorted.last().unwrap().0, "Travel");
    }
}
