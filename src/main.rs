use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::bot::Dispatcher;
use expense_tracker::cli::{initialize, open_ledger, print_config, ChatSession};
use expense_tracker::config::{paths::DATA_DIR_ENV, Settings, TrackerPaths};
use expense_tracker::render::SvgPieRenderer;

#[derive(Parser)]
#[command(
    name = "expense-bot",
    author = "Kaylee Beyene",
    version,
    about = "Chat-driven personal expense tracker",
    long_about = "Record expenses and salary by sending short chat messages \
                  such as 'food 250 lunch via UPI', then ask for balances, \
                  today's spending and pie-chart reports."
)]
struct Cli {
    /// Data directory (settings, workbook and chart outbox)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session on stdin/stdout
    Chat {
        /// Keep the ledger in memory instead of the workbook directory
        #[arg(long)]
        in_memory: bool,
    },

    /// Handle a single message and exit
    Send {
        /// Message text, e.g. `food 250 lunch via UPI` or `/balance`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Initialize the data directory and create the ledger sheets
    Init,

    /// Show current configuration and check the workbook
    Config,
}

/// Used when `RUST_LOG` is unset or cannot be parsed
const DEFAULT_LOG_FILTER: &str = "expense_tracker=info";

/// `RUST_LOG` directives win outright; otherwise log the crate at info
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Chat { in_memory }) => {
            let ledger = open_ledger(&paths, &settings, in_memory)?;
            let renderer = SvgPieRenderer::default();
            let mut session = ChatSession::new(
                Dispatcher::new(&ledger, &settings, &renderer),
                paths.outbox_dir(),
            );

            writeln!(out, "Expense tracker chat. Send /help for commands, Ctrl-D to quit.")?;
            writeln!(out)?;
            session.run(io::stdin().lock(), &mut out)?;
        }
        Some(Commands::Send { message }) => {
            let ledger = open_ledger(&paths, &settings, false)?;
            let renderer = SvgPieRenderer::default();
            let mut session = ChatSession::new(
                Dispatcher::new(&ledger, &settings, &renderer),
                paths.outbox_dir(),
            );
            session.send(&message.join(" "), Local::now().date_naive(), &mut out)?;
        }
        Some(Commands::Init) => {
            initialize(&paths, &settings, &mut out)?;
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings, &mut out)?;
        }
        None => {
            writeln!(out, "expense-bot - chat-driven expense tracker")?;
            writeln!(out)?;
            writeln!(out, "Run 'expense-bot --help' for usage information.")?;
            writeln!(out, "Run 'expense-bot chat' to start recording expenses.")?;
        }
    }

    Ok(())
}
