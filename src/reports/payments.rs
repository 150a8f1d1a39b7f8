//! Payment method distribution

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::format::{format_money, format_percentage};
use crate::models::{ExpenseRecord, Money};
use crate::render::ChartPanel;

use super::aggregate::{group_by_payment_method, grouping_total, sorted_by_amount, Grouping};
use super::window::Window;

/// All-time spending per payment method
#[derive(Debug, Clone)]
pub struct PaymentReport {
    pub distribution: Grouping,
    pub total: Money,
}

impl PaymentReport {
    pub fn generate(expenses: &[ExpenseRecord], today: NaiveDate) -> Self {
        let distribution = group_by_payment_method(expenses, Window::AllTime, today);
        Self {
            total: grouping_total(&distribution),
            distribution,
        }
    }

    pub fn chart_panel(&self, settings: &Settings) -> ChartPanel {
        ChartPanel::new(
            format!("Payment Method Distribution ({})", settings.currency_symbol),
            self.distribution.clone(),
            "No data",
        )
    }

    /// Caption with the per-method amounts, largest first
    pub fn format_caption(&self, settings: &Settings) -> String {
        let mut output = "💳 Payment Method Distribution".to_string();
        if self.total.is_zero() {
            return output;
        }
        output.push('\n');
        for (method, amount) in sorted_by_amount(&self.distribution) {
            let share = amount.as_f64() / self.total.as_f64() * 100.0;
            output.push_str(&format!(
                "\n- {}: {} ({})",
                method,
                format_money(amount, settings),
                format_percentage(share)
            ));
        }
        output
    }
}
