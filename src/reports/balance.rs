//! Balance summary
//!
//! Current balance plus this month's spending split by category and by
//! payment method.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::format::{escape_markdown, format_money};
use crate::error::TrackerResult;
use crate::models::Money;
use crate::storage::LedgerSnapshot;

use super::aggregate::{compute_balance, group_by_category, group_by_payment_method, Grouping};
use super::window::Window;

/// Financial summary shown by `/balance`
#[derive(Debug, Clone)]
pub struct BalanceSummary {
    pub balance: Money,
    pub month_label: String,
    pub by_category: Grouping,
    pub by_payment_method: Grouping,
}

impl BalanceSummary {
    pub fn generate(snapshot: &LedgerSnapshot, today: NaiveDate) -> TrackerResult<Self> {
        Ok(Self {
            balance: compute_balance(snapshot)?,
            month_label: Window::CurrentMonth.label(today),
            by_category: group_by_category(&snapshot.expenses, Window::CurrentMonth, today),
            by_payment_method: group_by_payment_method(
                &snapshot.expenses,
                Window::CurrentMonth,
                today,
            ),
        })
    }

    /// Markdown text for the chat reply
    pub fn format_markdown(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str("💼 *Financial Summary*\n");
        output.push_str(&format!(
            "💰 Current Balance: *{}*\n",
            format_money(self.balance, settings)
        ));
        output.push_str(&format!("📅 Month: {}\n\n", self.month_label));

        if self.by_category.is_empty() {
            output.push_str("No expenses recorded this month yet.");
            return output;
        }

        output.push_str("📊 *Monthly Expenses by Category:*\n");
        for (category, amount) in &self.by_category {
            output.push_str(&format!(
                "- {}: {}\n",
                escape_markdown(category),
                format_money(*amount, settings)
            ));
        }

        output.push_str("\n💳 *Monthly Expenses by Payment Method:*\n");
        for (method, amount) in &self.by_payment_method {
            output.push_str(&format!("- {}: {}\n", method, format_money(*amount, settings)));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, PaymentMethod, SalaryRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary_scopes_groups_to_month_but_not_balance() {
        let snapshot = LedgerSnapshot {
            salaries: vec![SalaryRecord::new(date(2024, 1, 1), Money::from_units(1000), "Pay")],
            expenses: vec![
                ExpenseRecord::new(date(2024, 5, 3), "Food", Money::from_units(250))
                    .with_payment_method(PaymentMethod::Upi),
                ExpenseRecord::new(date(2024, 4, 3), "Rent", Money::from_units(100)),
            ],
        };

        let summary = BalanceSummary::generate(&snapshot, date(2024, 5, 20)).unwrap();
        assert_eq!(summary.balance, Money::from_units(650));
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_payment_method["UPI"], Money::from_units(250));

        let text = summary.format_markdown(&Settings::default());
        assert!(text.contains("Current Balance: *₹650.00*"));
        assert!(text.contains("Month: May 2024"));
        assert!(text.contains("- Food: ₹250.00"));
        assert!(text.contains("- UPI: ₹250.00"));
        assert!(!text.contains("Rent"));
    }

    #[test]
    fn test_summary_without_monthly_expenses() {
        let summary =
            BalanceSummary::generate(&LedgerSnapshot::default(), date(2024, 5, 20)).unwrap();
        let text = summary.format_markdown(&Settings::default());
        assert!(text.contains("₹0.00"));
        assert!(text.ends_with("No expenses recorded this month yet."));
    }
}
