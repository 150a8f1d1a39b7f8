//! Terminal chat transport
//!
//! Reads one message per line, hands it to the dispatcher and prints the
//! reply. Chart images cannot be shown in a terminal, so they are written to
//! the outbox directory and the reply prints the file path instead.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::bot::{Dispatcher, Reply};
use crate::error::TrackerResult;
use crate::render::RenderedChart;

/// One interactive session over a line-oriented input and output
pub struct ChatSession<'a> {
    dispatcher: Dispatcher<'a>,
    outbox: PathBuf,
    images_sent: usize,
}

impl<'a> ChatSession<'a> {
    pub fn new(dispatcher: Dispatcher<'a>, outbox: impl Into<PathBuf>) -> Self {
        Self {
            dispatcher,
            outbox: outbox.into(),
            images_sent: 0,
        }
    }

    /// Handle lines until the input ends
    ///
    /// Blank lines are ignored. Each message is dated with the local date at
    /// the moment it is read.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> TrackerResult<()> {
        let mut handled = 0usize;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.send(&line, Local::now().date_naive(), &mut output)?;
            handled += 1;
        }
        info!(messages = handled, "Chat session ended");
        Ok(())
    }

    /// Handle a single message and print its reply
    pub fn send<W: Write>(&mut self, text: &str, today: NaiveDate, output: &mut W) -> TrackerResult<Reply> {
        let reply = self.dispatcher.handle(text, today);
        let saved = match &reply.image {
            Some(image) => Some(self.save_image(image)?),
            None => None,
        };
        write_reply(output, &reply, saved.as_deref())?;
        Ok(reply)
    }

    fn save_image(&mut self, image: &RenderedChart) -> TrackerResult<PathBuf> {
        fs::create_dir_all(&self.outbox)?;
        self.images_sent += 1;
        let file_name = format!(
            "chart-{}-{:03}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            self.images_sent,
            image.extension
        );
        let path = self.outbox.join(file_name);
        fs::write(&path, &image.bytes)?;
        info!(path = %path.display(), media_type = image.media_type, "Saved chart");
        Ok(path)
    }
}

/// Print a reply followed by a blank separator line
pub fn write_reply<W: Write>(output: &mut W, reply: &Reply, image_path: Option<&Path>) -> TrackerResult<()> {
    if let Some(path) = image_path {
        writeln!(output, "🖼  {}", path.display())?;
    }
    writeln!(output, "{}", reply.text)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::SvgPieRenderer;
    use crate::storage::{Ledger, MemoryWorkbook};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_session_prints_replies() {
        let settings = Settings::default();
        let ledger = Ledger::open(Box::new(MemoryWorkbook::new()), &settings).unwrap();
        let renderer = SvgPieRenderer::default();
        let temp_dir = TempDir::new().unwrap();
        let mut session = ChatSession::new(
            Dispatcher::new(&ledger, &settings, &renderer),
            temp_dir.path().join("outbox"),
        );

        let input = Cursor::new("/addsalary 1000\n\nfood 250 lunch\n/today\n");
        let mut output = Vec::new();
        session.run(input, &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Salary Added: ₹1000.00"));
        assert!(printed.contains("Remaining Balance: ₹750.00"));
        assert!(printed.contains("Today's Total: ₹250.00"));
        assert_eq!(ledger.expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_chart_written_to_outbox() {
        let settings = Settings::default();
        let ledger = Ledger::open(Box::new(MemoryWorkbook::new()), &settings).unwrap();
        let renderer = SvgPieRenderer::default();
        let temp_dir = TempDir::new().unwrap();
        let outbox = temp_dir.path().join("outbox");
        let mut session = ChatSession::new(Dispatcher::new(&ledger, &settings, &renderer), &outbox);

        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let mut output = Vec::new();
        session.send("food 250", today, &mut output).unwrap();
        let reply = session.send("/report", today, &mut output).unwrap();
        assert!(reply.has_image());

        let files: Vec<_> = fs::read_dir(&outbox).unwrap().collect();
        assert_eq!(files.len(), 1);
        let path = files[0].as_ref().unwrap().path();
        assert_eq!(path.extension().unwrap(), "svg");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains(&path.display().to_string()));
    }
}
