//! Chat message texts
//!
//! Everything the bot says that is not a report lives here so the wording
//! stays in one place.

use crate::config::Settings;
use crate::models::{ExpenseRecord, Money, SalaryRecord};

use super::format::{escape_markdown, format_date, format_money};

/// Reply to `/start` and `/help` (Markdown)
pub fn help_text() -> String {
    [
        "💰 *Expense Tracker Bot*",
        "",
        "Send expenses as:",
        "`category amount description via payment_method`",
        "",
        "Examples:",
        "`food 250 lunch via UPI`",
        "`15/06 travel 1200 train tickets via card`",
        "",
        "Payment methods: Cash (default), UPI, Card, Bank Transfer, Other",
        "",
        "Commands:",
        "/addsalary <amount> [description] - Record income",
        "/balance - Current balance and this month's spending",
        "/report - Monthly and yearly spending charts",
        "/today - Today's expenses",
        "/payments - Spending by payment method",
        "/help - Show this message",
    ]
    .join("\n")
}

/// Confirmation after an expense has been stored
pub fn expense_added(
    expense: &ExpenseRecord,
    balance: Option<Money>,
    unrecognized_payment: Option<&str>,
    settings: &Settings,
) -> String {
    let mut output = format!(
        "✅ Expense Added:\n📅 Date: {}\n🏷 Category: {}\n💸 Amount: {}\n",
        format_date(expense.date, settings),
        expense.category,
        format_money(expense.amount, settings),
    );
    if !expense.description.is_empty() {
        output.push_str(&format!("📝 Description: {}\n", expense.description));
    }
    output.push_str(&format!("💳 Payment: {}\n", expense.payment_method));
    if let Some(phrase) = unrecognized_payment {
        output.push_str(&format!(
            "ℹ️ Unknown payment method '{}', recorded as {}\n",
            phrase, expense.payment_method
        ));
    }
    output.push_str(&format!("💰 Remaining Balance: {}", balance_text(balance, settings)));
    output
}

/// Confirmation after a salary has been stored
pub fn salary_added(salary: &SalaryRecord, balance: Option<Money>, settings: &Settings) -> String {
    format!(
        "💰 Salary Added: {}\n📝 {}\n💵 Current Balance: {}",
        format_money(salary.amount, settings),
        salary.description,
        balance_text(balance, settings)
    )
}

/// The balance after a saved record; the record stands even when this is missing
fn balance_text(balance: Option<Money>, settings: &Settings) -> String {
    match balance {
        Some(balance) => format_money(balance, settings),
        None => "unavailable right now (the entry was saved)".to_string(),
    }
}

pub fn salary_usage() -> String {
    "Usage: /addsalary <amount> [description]".to_string()
}

/// Reply to `/addsalary` with an amount that is not a positive number
pub fn salary_failure(reason: &str) -> String {
    format!("⚠️ {}\n\n{}", reason, salary_usage())
}

/// Corrective reply for a message the parser rejected (Markdown)
pub fn parse_failure(reason: &str) -> String {
    format!(
        "⚠️ {}\n\nUse format: `category amount description via payment_method`\nExample: `food 250 lunch via UPI`",
        escape_markdown(reason)
    )
}

/// Generic notice when the ledger cannot be read or written
pub fn store_failure() -> String {
    "⚠️ Could not reach the expense ledger. Please try again later.".to_string()
}

pub fn unknown_command(command: &str) -> String {
    format!("Unknown command /{}. Send /help to see what I understand.", command)
}

pub fn no_expenses_yet() -> String {
    "No expenses recorded yet!".to_string()
}

/// Last-resort reply for anything unexpected
pub fn fallback_error(error: &dyn std::fmt::Display) -> String {
    format!("⚠️ Error: {}", error)
}
