//! Reports module for the expense tracker
//!
//! Aggregation over the ledger (balance, windows, groupings) and the report
//! views built on it: balance summary, spending by category, today's
//! expenses and the payment method distribution.

pub mod aggregate;
pub mod balance;
pub mod payments;
pub mod spending;
pub mod today;
pub mod window;

pub use aggregate::{
    compute_balance, filter_by_window, group_by_category, group_by_payment_method, Grouping,
};
pub use balance::BalanceSummary;
pub use payments::PaymentReport;
pub use spending::SpendingReport;
pub use today::TodayReport;
pub use window::{Dated, Window};
