//! CLI command handlers
//!
//! Bridges the clap argument parsing in the binary with the bot core: the
//! interactive chat session, one-shot messages, initialization and the
//! configuration check.

pub mod chat;
pub mod setup;

pub use chat::{write_reply, ChatSession};
pub use setup::{initialize, open_ledger, print_config};
