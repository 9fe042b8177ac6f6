//! Status line text: word/character counts and save state

use std::fmt;

use chrono::{DateTime, Utc};

use crate::editable::EditorState;

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of Unicode scalar values
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Human-readable save state
pub fn save_label(last_saved: Option<DateTime<Utc>>, dirty: bool, now: DateTime<Utc>) -> String {
    let Some(saved) = last_saved else {
        return "Not saved yet".to_string();
    };
    if dirty {
        return "Saving...".to_string();
    }
    let diff = (now - saved).num_seconds().max(0) as u64;
    if diff < 60 {
        "Saved just now".to_string()
    } else {
        format!("Saved {}", time_ago(diff))
    }
}

fn time_ago(diff: u64) -> String {
    if diff < 3600 {
        let mins = diff / 60;
        format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if diff < 86400 {
        let hours = diff / 3600;
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if diff < 604800 {
        let days = diff / 86400;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else {
        let weeks = diff / 604800;
        format!("{} week{} ago", weeks, if weeks == 1 { "" } else { "s" })
    }
}

/// Everything the status line shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub words: usize,
    pub chars: usize,
    pub save: String,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl StatusLine {
    pub fn from_editor(editor: &EditorState, now: DateTime<Utc>) -> Self {
        let content = editor.content();
        Self {
            words: word_count(content),
            chars: char_count(content),
            save: save_label(editor.last_saved(), editor.is_dirty(), now),
            can_undo: editor.can_undo(),
            can_redo: editor.can_redo(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} · {} {} · {}",
            self.words,
            if self.words == 1 { "word" } else { "words" },
            self.chars,
            if self.chars == 1 { "char" } else { "chars" },
            self.save
        )
    }
}
