//! Chat bot core
//!
//! Classifies inbound messages, runs the matching command against the
//! ledger and builds the reply. Transport-agnostic: the terminal chat in
//! `cli` is one way to drive it.

pub mod command;
pub mod dispatcher;
pub mod reply;

pub use command::{Command, Inbound};
pub use dispatcher::Dispatcher;
pub use reply::{Reply, ReplyFormat};
