//! Expense message parser
//!
//! Turns one line of chat text into a structured expense:
//!
//! ```text
//! [DD/MM] <category> <amount> [description...] [via <payment method>]
//! ```
//!
//! The parser is pure: the only clock it sees is the reference date passed in.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::debug;

use crate::models::{ExpenseRecord, Money, PaymentMatch, PaymentMethod};

const VIA: &str = "via";

/// Reasons a message cannot become an expense
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid date format. Use DD/MM")]
    InvalidDate,

    #[error("Invalid amount. Please enter a positive number with at most two decimal places")]
    InvalidAmount,

    #[error("Missing category")]
    MissingCategory,
}

/// An expense read from a chat message, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub description: String,
    pub payment_method: PaymentMethod,
    /// The `via` phrase when it matched no known method and fell back to Other
    pub unrecognized_payment: Option<String>,
}

impl ParsedExpense {
    /// The ledger row this expense will be stored as
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord::new(self.date, self.category.clone(), self.amount)
            .with_description(self.description.clone())
            .with_payment_method(self.payment_method)
    }
}

/// Parse an expense message relative to `reference_date` (today)
pub fn parse_expense(raw_text: &str, reference_date: NaiveDate) -> Result<ParsedExpense, ParseError> {
    let lowered = raw_text.to_lowercase();
    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();

    let (payment_method, unrecognized_payment) = match tokens.iter().position(|t| *t == VIA) {
        Some(via_index) => {
            let phrase = tokens[via_index + 1..].join(" ");
            tokens.truncate(via_index);
            match PaymentMethod::match_phrase(&phrase) {
                PaymentMatch::Found(method) => (method, None),
                PaymentMatch::NotFound => {
                    debug!(phrase = %phrase, "unrecognized payment method, recording as Other");
                    (PaymentMethod::Other, Some(phrase))
                }
            }
        }
        None => (PaymentMethod::Cash, None),
    };

    let mut rest = tokens.into_iter().peekable();

    let date = match rest.peek().copied().and_then(split_day_month) {
        Some((day, month)) => {
            rest.next();
            resolve_day_month(day, month, reference_date.year())?
        }
        None => reference_date,
    };

    let category = rest
        .next()
        .map(title_case)
        .ok_or(ParseError::MissingCategory)?;

    let amount = rest
        .next()
        .and_then(|token| Money::parse(token).ok())
        .filter(Money::is_valid_entry)
        .ok_or(ParseError::InvalidAmount)?;

    let description = rest.collect::<Vec<_>>().join(" ");

    Ok(ParsedExpense {
        date,
        category,
        amount,
        description,
        payment_method,
        unrecognized_payment,
    })
}

/// Parse the arguments of `/addsalary <amount> [description...]`
///
/// Returns the amount and the description, if one was given.
pub fn parse_salary_args(args: &[String]) -> Result<(Money, Option<String>), ParseError> {
    let amount = args
        .first()
        .and_then(|token| Money::parse(token).ok())
        .filter(Money::is_valid_entry)
        .ok_or(ParseError::InvalidAmount)?;

    let description = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };

    Ok((amount, description))
}

/// Split a `DD/MM` token into its numeric halves; `None` if it is not date-shaped
fn split_day_month(token: &str) -> Option<(&str, &str)> {
    let (day, month) = token.split_once('/')?;
    let numeric = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    if numeric(day) && numeric(month) {
        Some((day, month))
    } else {
        None
    }
}

fn resolve_day_month(day: &str, month: &str, year: i32) -> Result<NaiveDate, ParseError> {
    let day: u32 = day.parse().map_err(|_| ParseError::InvalidDate)?;
    let month: u32 = month.parse().map_err(|_| ParseError::InvalidDate)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_alphabetic = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(c);
            previous_alphabetic = false;
        }
    }
    out
}
