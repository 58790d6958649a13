//! Terminal command interpreter
//!
//! Commands are matched by exact string comparison against a fixed table.
//! Adding a command means adding a [`Command`] variant and its branch.

/// Reply to `help`
pub const HELP_TEXT: &str = "Available: help, clear, hello, exit, about";
/// Reply to `hello`
pub const GREETING: &str = "System: Welcome to UIED Terminal, User!";
/// Reply to `about`
pub const ABOUT_LINES: [&str; 2] = [
    "UIED Engine v3.5 - Terminal Edition",
    "Status: System Healthy.",
];

/// A parsed terminal line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Hello,
    About,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(text: &str) -> Self {
        match text {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "hello" => Command::Hello,
            "about" => Command::About,
            "exit" => Command::Exit,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Effect of a command on the terminal that received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction {
    /// Append these lines to the terminal history
    Print(Vec<String>),
    /// Empty the terminal history
    Clear,
    /// End the process immediately
    Exit,
    Nothing,
}

/// Map a submitted line to the action it triggers
pub fn interpret(text: &str) -> TerminalAction {
    match Command::parse(text) {
        Command::Help => TerminalAction::Print(vec![HELP_TEXT.to_string()]),
        Command::Clear => TerminalAction::Clear,
        Command::Hello => TerminalAction::Print(vec![GREETING.to_string()]),
        Command::About => {
            TerminalAction::Print(ABOUT_LINES.iter().map(|line| line.to_string()).collect())
        }
        Command::Exit => TerminalAction::Exit,
        Command::Empty => TerminalAction::Nothing,
        Command::Unknown(cmd) => {
            TerminalAction::Print(vec![format!("Error: Unknown command '{}'", cmd)])
        }
    }
}
