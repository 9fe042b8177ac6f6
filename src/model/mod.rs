//! Application model - the complete state of the journal session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod journal;

pub use journal::{Entry, EntryStore, Journal, ENTRIES_KEY};

use crate::config::JournalConfig;
use crate::editable::EditorState;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Editing state of the active entry
    pub editor: EditorState,
    /// All entries; the active one is what `editor` was initialized from
    pub journal: Journal,
    pub config: JournalConfig,
    /// A save has been issued and has not reported back yet
    pub save_pending: bool,
}

impl AppModel {
    /// Build a model editing the journal's active entry
    pub fn new(journal: Journal, config: JournalConfig) -> Self {
        let editor =
            EditorState::with_history_limit(journal.active_document_text(), config.history_limit);
        Self {
            editor,
            journal,
            config,
            save_pending: false,
        }
    }

    /// Copy unsaved editor content into the active entry (in memory).
    ///
    /// Used before the editor is reinitialized for another entry. Returns
    /// `true` if the journal changed.
    pub fn commit_active(&mut self) -> bool {
        if !self.editor.is_dirty() {
            return false;
        }
        let Some(id) = self.journal.active_id() else {
            return false;
        };
        self.journal.persist(id, self.editor.content());
        true
    }

    /// INIT the editor from the journal's active entry
    pub fn load_active(&mut self, keep_last_saved: bool) {
        let text = self.journal.active_document_text();
        self.editor.init(text, keep_last_saved);
        self.save_pending = false;
    }
}
