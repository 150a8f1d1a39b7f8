//! Command dispatcher
//!
//! Handles one inbound message to completion: parse, persist, re-aggregate,
//! reply. Every failure becomes a reply; nothing escapes [`Dispatcher::handle`].

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::messages;
use crate::error::{TrackerError, TrackerResult};
use crate::render::ChartRenderer;
use crate::reports::{BalanceSummary, PaymentReport, SpendingReport, TodayReport};
use crate::services::{parse_salary_args, ExpenseService, SalaryService};
use crate::storage::Ledger;

use super::command::{Command, Inbound};
use super::reply::Reply;

/// Routes inbound messages to services and reports
pub struct Dispatcher<'a> {
    ledger: &'a Ledger,
    settings: &'a Settings,
    renderer: &'a dyn ChartRenderer,
}

impl<'a> Dispatcher<'a> {
    pub fn new(ledger: &'a Ledger, settings: &'a Settings, renderer: &'a dyn ChartRenderer) -> Self {
        Self {
            ledger,
            settings,
            renderer,
        }
    }

    /// Handle one message; `today` is the reference date for parsing and windows
    pub fn handle(&self, text: &str, today: NaiveDate) -> Reply {
        let inbound = Inbound::parse(text);
        debug!(?inbound, "Dispatching message");

        match self.route(inbound, today) {
            Ok(reply) => reply,
            Err(e) => self.failure_reply(e),
        }
    }

    fn route(&self, inbound: Inbound, today: NaiveDate) -> TrackerResult<Reply> {
        match inbound {
            Inbound::Text(text) => self.add_expense(&text, today),
            Inbound::Command(command) => match command {
                Command::Start | Command::Help => Ok(Reply::markdown(messages::help_text())),
                Command::AddSalary(args) => self.add_salary(&args, today),
                Command::Balance => self.balance(today),
                Command::Report => self.report(today),
                Command::Today => self.today(today),
                Command::Payments => self.payments(today),
                Command::Unknown(name) => Ok(Reply::plain(messages::unknown_command(&name))),
            },
        }
    }

    fn add_expense(&self, text: &str, today: NaiveDate) -> TrackerResult<Reply> {
        let recorded = ExpenseService::new(self.ledger).record(text, today)?;
        Ok(Reply::plain(messages::expense_added(
            &recorded.record,
            recorded.balance,
            recorded.unrecognized_payment.as_deref(),
            self.settings,
        )))
    }

    fn add_salary(&self, args: &[String], today: NaiveDate) -> TrackerResult<Reply> {
        if args.is_empty() {
            return Ok(Reply::plain(messages::salary_usage()));
        }

        let (amount, description) = match parse_salary_args(args) {
            Ok(parsed) => parsed,
            Err(e) => return Ok(Reply::plain(messages::salary_failure(&e.to_string()))),
        };

        let recorded = SalaryService::new(self.ledger, self.settings).add(amount, description, today)?;
        Ok(Reply::plain(messages::salary_added(
            &recorded.record,
            recorded.balance,
            self.settings,
        )))
    }

    fn balance(&self, today: NaiveDate) -> TrackerResult<Reply> {
        let snapshot = self.ledger.snapshot()?;
        let summary = BalanceSummary::generate(&snapshot, today)?;
        Ok(Reply::markdown(summary.format_markdown(self.settings)))
    }

    fn report(&self, today: NaiveDate) -> TrackerResult<Reply> {
        let expenses = self.ledger.expenses()?;
        if expenses.is_empty() {
            return Ok(Reply::plain(messages::no_expenses_yet()));
        }

        let report = SpendingReport::generate(&expenses, today);
        let chart = self.renderer.render(&report.chart_panels())?;
        Ok(Reply::with_image(report.format_caption(self.settings), chart))
    }

    fn today(&self, today: NaiveDate) -> TrackerResult<Reply> {
        let expenses = self.ledger.expenses()?;
        let report = TodayReport::generate(&expenses, today);
        Ok(Reply::plain(report.format_message(self.settings)))
    }

    fn payments(&self, today: NaiveDate) -> TrackerResult<Reply> {
        let expenses = self.ledger.expenses()?;
        if expenses.is_empty() {
            return Ok(Reply::plain(messages::no_expenses_yet()));
        }

        let report = PaymentReport::generate(&expenses, today);
        let chart = self.renderer.render(&[report.chart_panel(self.settings)])?;
        Ok(Reply::with_image(report.format_caption(self.settings), chart))
    }

    fn failure_reply(&self, error: TrackerError) -> Reply {
        match error {
            TrackerError::Parse(e) => {
                debug!(error = %e, "Rejected message");
                Reply::markdown(messages::parse_failure(&e.to_string()))
            }
            TrackerError::StoreUnavailable(detail) => {
                warn!(%detail, "Ledger store failure");
                Reply::plain(messages::store_failure())
            }
            other => {
                warn!(error = %other, "Unexpected failure while handling message");
                Reply::plain(messages::fallback_error(&other))
            }
        }
    }
}
