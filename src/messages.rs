//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Editing intents for the active entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Replace the whole document text
    SetContent(String),
    /// Append text to the end of the document
    Append(String),
    /// Step back in history
    Undo,
    /// Step forward in history
    Redo,
    /// Explicit save request (Cmd+S)
    Save,
}

/// Entry collection messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalMsg {
    /// Create an empty entry dated at the given time and switch to it
    NewEntry(DateTime<Utc>),
    /// Switch the editor to another entry
    SelectEntry(Uuid),
    /// Delete an entry; `now` dates the replacement if it was the last one
    DeleteEntry { id: Uuid, now: DateTime<Utc> },
}

/// Session-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// A save finished; `content` is the text that was written
    SaveCompleted {
        content: String,
        result: Result<DateTime<Utc>, String>,
    },
    /// Write any unsaved changes (on exit)
    Flush,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editing the active entry
    Editor(EditorMsg),
    /// Managing entries
    Journal(JournalMsg),
    /// Session lifecycle and I/O results
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn set_content(content: impl Into<String>) -> Self {
        Msg::Editor(EditorMsg::SetContent(content.into()))
    }

    pub fn append(text: impl Into<String>) -> Self {
        Msg::Editor(EditorMsg::Append(text.into()))
    }

    pub fn undo() -> Self {
        Msg::Editor(EditorMsg::Undo)
    }

    pub fn redo() -> Self {
        Msg::Editor(EditorMsg::Redo)
    }

    pub fn save() -> Self {
        Msg::Editor(EditorMsg::Save)
    }

    /// New entry dated now
    pub fn new_entry() -> Self {
        Msg::Journal(JournalMsg::NewEntry(Utc::now()))
    }

    pub fn select_entry(id: Uuid) -> Self {
        Msg::Journal(JournalMsg::SelectEntry(id))
    }

    pub fn delete_entry(id: Uuid) -> Self {
        Msg::Journal(JournalMsg::DeleteEntry { id, now: Utc::now() })
    }
}
