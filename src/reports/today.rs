//! Today's expenses

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::format::format_money;
use crate::models::{ExpenseRecord, Money};

use super::aggregate::{filter_by_window, total_in_window};
use super::window::Window;

/// Every expense dated today, in ledger order
#[derive(Debug, Clone)]
pub struct TodayReport {
    pub entries: Vec<ExpenseRecord>,
    pub total: Money,
}

impl TodayReport {
    pub fn generate(expenses: &[ExpenseRecord], today: NaiveDate) -> Self {
        let entries: Vec<ExpenseRecord> = filter_by_window(expenses, Window::Today, today)
            .into_iter()
            .cloned()
            .collect();
        let total = total_in_window(expenses, Window::Today, today);
        Self { entries, total }
    }

    /// Plain-text listing for the chat reply
    pub fn format_message(&self, settings: &Settings) -> String {
        if self.entries.is_empty() {
            return "No expenses recorded for today!".to_string();
        }

        let mut output = format!("📝 Today's Expenses ({}):\n\n", settings.currency_symbol);
        for expense in &self.entries {
            output.push_str(&format!(
                "• {}: {}",
                expense.category,
                format_money(expense.amount, settings)
            ));
            if !expense.description.is_empty() {
                output.push_str(&format!(" ({})", expense.description));
            }
            output.push_str(&format!(" [{}]\n", expense.payment_method));
        }
        output.push_str(&format!(
            "\n💵 Today's Total: {}",
            format_money(self.total, settings)
        ));
        output
    }
}
