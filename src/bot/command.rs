//! Inbound message classification

/// A bot command with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    AddSalary(Vec<String>),
    Balance,
    Report,
    Today,
    Payments,
    /// Any other `/word`, lowercased and without the `@bot` suffix
    Unknown(String),
}

/// One inbound chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    /// Non-command text, routed to the expense parser
    Text(String),
}

impl Inbound {
    /// Classify raw message text
    ///
    /// A message is a command when its first token starts with `/`. The
    /// command name is case-insensitive and may carry a `@botname` suffix.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let mut tokens = trimmed.split_whitespace();

        let head = match tokens.next() {
            Some(head) if head.starts_with('/') && head.len() > 1 => head,
            _ => return Inbound::Text(trimmed.to_string()),
        };

        let name = head[1..]
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "addsalary" => Command::AddSalary(args),
            "balance" => Command::Balance,
            "report" => Command::Report,
            "today" => Command::Today,
            "payments" => Command::Payments,
            _ => Command::Unknown(name),
        };
        Inbound::Command(command)
    }
}
