//! Line-oriented editing prompt
//!
//! Each input line is either a `:command` or text appended to the entry.
//! A literal leading colon can be written as `::`.

use thiserror::Error;

use crate::messages::Msg;

/// Prompt parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Unknown command: {0} (try :help)")]
    UnknownCommand(String),
}

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// Append this text (plus a newline) to the entry
    Text(String),
    Undo,
    Redo,
    Save,
    /// Print the entry
    Show,
    /// Print the status line
    Status,
    /// Replace the entry with nothing
    Clear,
    Help,
    Quit,
}

impl PromptInput {
    /// Parse one line of input (without its trailing newline)
    pub fn parse(line: &str) -> Result<Self, PromptError> {
        if let Some(rest) = line.strip_prefix("::") {
            return Ok(PromptInput::Text(format!(":{}", rest)));
        }
        let Some(cmd) = line.strip_prefix(':') else {
            return Ok(PromptInput::Text(line.to_string()));
        };

        match cmd.trim() {
            "u" | "undo" => Ok(PromptInput::Undo),
            "r" | "redo" => Ok(PromptInput::Redo),
            "w" | "save" => Ok(PromptInput::Save),
            "p" | "show" => Ok(PromptInput::Show),
            "s" | "status" => Ok(PromptInput::Status),
            "clear" => Ok(PromptInput::Clear),
            "h" | "help" => Ok(PromptInput::Help),
            "q" | "quit" | "wq" => Ok(PromptInput::Quit),
            other => Err(PromptError::UnknownCommand(other.to_string())),
        }
    }

    /// The message this input dispatches, if it edits or saves
    pub fn to_msg(&self) -> Option<Msg> {
        match self {
            PromptInput::Text(text) => Some(Msg::append(format!("{}\n", text))),
            PromptInput::Undo => Some(Msg::undo()),
            PromptInput::Redo => Some(Msg::redo()),
            PromptInput::Save => Some(Msg::save()),
            PromptInput::Clear => Some(Msg::set_content("")),
            PromptInput::Show | PromptInput::Status | PromptInput::Help | PromptInput::Quit => {
                None
            }
        }
    }
}

pub const HELP: &str = "\
Type to append lines to today's entry.
  :undo  :u    step back
  :redo  :r    step forward
  :save  :w    save now
  :show  :p    print the entry
  :status :s   word count and save state
  :clear       empty the entry
  :quit  :q    save and exit
Start a line with :: to write a literal colon.";
