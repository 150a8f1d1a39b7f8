//! Expense Tracker - chat-driven personal expense tracking
//!
//! Expenses are sent as short messages (`food 250 lunch via UPI`), parsed
//! into records and appended to a spreadsheet-like ledger. Commands read the
//! whole ledger back to report the balance, today's spending and pie charts
//! of spending by category and payment method.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and persisted settings
//! - `error`: Custom error types
//! - `models`: Money, payment methods, expense and salary records
//! - `storage`: Ledger store trait, CSV and in-memory workbooks, typed ledger
//! - `services`: Message parser and the record services
//! - `reports`: Aggregation and report views
//! - `render`: Chart rendering
//! - `display`: Formatting and message texts
//! - `bot`: Message classification and dispatch
//! - `cli`: Terminal chat transport and setup commands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::bot::Dispatcher;
//! use expense_tracker::config::Settings;
//! use expense_tracker::render::SvgPieRenderer;
//! use expense_tracker::storage::{Ledger, MemoryWorkbook};
//!
//! let settings = Settings::default();
//! let ledger = Ledger::open(Box::new(MemoryWorkbook::new()), &settings)?;
//! let renderer = SvgPieRenderer::default();
//! let dispatcher = Dispatcher::new(&ledger, &settings, &renderer);
//! let reply = dispatcher.handle("food 250 lunch via UPI", chrono::Local::now().date_naive());
//! ```

pub mod bot;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod render;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
