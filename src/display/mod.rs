//! Display formatting for chat output
//!
//! Money, date and percentage formatting plus the fixed message texts the
//! bot replies with.

pub mod format;
pub mod messages;

pub use format::{escape_markdown, format_date, format_money, format_percentage, truncate};
