//! Spending Report
//!
//! Category spending for the current month and the current year, with the
//! chart panels `/report` sends.

use chrono::{Datelike, NaiveDate};

use crate::config::Settings;
use crate::display::format::format_money;
use crate::models::{ExpenseRecord, Money};
use crate::render::ChartPanel;

use super::aggregate::{group_by_category, grouping_total, Grouping};
use super::window::Window;

/// Monthly and yearly spending by category
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// e.g. "May 2024"
    pub month_label: String,
    pub year: i32,
    pub monthly: Grouping,
    pub yearly: Grouping,
    pub monthly_total: Money,
    pub yearly_total: Money,
}

impl SpendingReport {
    pub fn generate(expenses: &[ExpenseRecord], today: NaiveDate) -> Self {
        let monthly = group_by_category(expenses, Window::CurrentMonth, today);
        let yearly = group_by_category(expenses, Window::CurrentYear, today);

        Self {
            month_label: Window::CurrentMonth.label(today),
            year: today.year(),
            monthly_total: grouping_total(&monthly),
            yearly_total: grouping_total(&yearly),
            monthly,
            yearly,
        }
    }

    /// The two pie panels: this month and this year
    pub fn chart_panels(&self) -> Vec<ChartPanel> {
        vec![
            ChartPanel::new(
                format!("Monthly Expenses ({})", self.month_label),
                self.monthly.clone(),
                "No data\nfor current month",
            ),
            ChartPanel::new(
                format!("Yearly Expenses ({})", self.year),
                self.yearly.clone(),
                "No data\nfor current year",
            ),
        ]
    }

    /// Caption sent with the chart
    pub fn format_caption(&self, settings: &Settings) -> String {
        format!(
            "📊 Expense Report ({})\n\n📅 {} Total: {}\n📅 {} Total: {}",
            settings.currency_symbol,
            self.month_label,
            format_money(self.monthly_total, settings),
            self.year,
            format_money(self.yearly_total, settings)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_spending_report() {
        let expenses = vec![
            ExpenseRecord::new(date(2024, 5, 1), "Food", Money::from_units(250)),
            ExpenseRecord::new(date(2024, 5, 9), "Travel", Money::from_units(50)),
            ExpenseRecord::new(date(2024, 1, 9), "Food", Money::from_units(100)),
            ExpenseRecord::new(date(2023, 5, 9), "Food", Money::from_units(999)),
        ];

        let report = SpendingReport::generate(&expenses, date(2024, 5, 15));
        assert_eq!(report.monthly_total, Money::from_units(300));
        assert_eq!(report.yearly_total, Money::from_units(400));
        assert_eq!(report.yearly["Food"], Money::from_units(350));

        let caption = report.format_caption(&Settings::default());
        assert!(caption.contains("📅 May 2024 Total: ₹300.00"));
        assert!(caption.contains("📅 2024 Total: ₹400.00"));

        let panels = report.chart_panels();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].title, "Monthly Expenses (May 2024)");
        assert_eq!(panels[1].title, "Yearly Expenses (2024)");
    }

    #[test]
    fn test_empty_month_keeps_year() {
        let expenses = vec![ExpenseRecord::new(date(2024, 1, 1), "Food", Money::from_units(10))];
        let report = SpendingReport::generate(&expenses, date(2024, 5, 15));
        assert!(report.monthly.is_empty());
        assert_eq!(report.monthly_total, Money::zero());
        assert_eq!(report.yearly_total, Money::from_units(10));
    }
}
