//! EditorState - the editing state machine for a single journal entry.
//!
//! Content is read straight from the history cursor and dirtiness is
//! computed against the last saved text, so neither can drift out of sync
//! with the history bookkeeping.

use chrono::{DateTime, Utc};

use super::history::{ContentHistory, DEFAULT_HISTORY_LIMIT};
use crate::codec::StoredBlob;

/// Editable document with dirty tracking and linear undo/redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Snapshot history; its current entry is the document content
    history: ContentHistory,
    /// Content as of the last successful save (or INIT)
    base_content: String,
    /// Wall-clock time of the last successful save
    last_saved: Option<DateTime<Utc>>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditorState {
    /// Create a clean editor holding `content`
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_history_limit(content, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a clean editor with a custom undo bound
    pub fn with_history_limit(content: impl Into<String>, limit: usize) -> Self {
        let content = content.into();
        Self {
            history: ContentHistory::with_max_size(content.clone(), limit),
            base_content: content,
            last_saved: None,
        }
    }

    /// Rebuild an editor from a decoded draft.
    ///
    /// The draft's history is only trusted when it is consistent with its
    /// own content; otherwise the editor starts with fresh history. The
    /// restored editor is clean: the draft content is treated as saved.
    pub fn restore(blob: StoredBlob, limit: usize) -> Self {
        let StoredBlob {
            content,
            history,
            history_index,
        } = blob;

        match ContentHistory::from_parts(history, history_index, &content, limit) {
            Some(history) => Self {
                history,
                base_content: content,
                last_saved: None,
            },
            None => {
                tracing::debug!("Draft history inconsistent with content, starting fresh");
                Self::with_history_limit(content, limit)
            }
        }
    }

    /// INIT: reset to `content` with fresh history.
    ///
    /// `last_saved` is cleared unless `keep_last_saved` is set, which callers
    /// use only when reloading the same logical document.
    pub fn init(&mut self, content: impl Into<String>, keep_last_saved: bool) {
        let content = content.into();
        let last_saved = if keep_last_saved {
            self.last_saved
        } else {
            None
        };
        self.history = ContentHistory::with_max_size(content.clone(), self.history.max_size());
        self.base_content = content;
        self.last_saved = last_saved;
    }

    /// SET_CONTENT: record a new version of the document.
    ///
    /// Returns `false` when `content` is identical to the current text.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        self.history.push(content.into())
    }

    /// UNDO: step back to the previous snapshot
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// REDO: step forward to the next snapshot
    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    /// SAVE: mark the current content as saved now
    pub fn save(&mut self) {
        self.save_at(Utc::now());
    }

    /// SAVE with an explicit timestamp
    pub fn save_at(&mut self, at: DateTime<Utc>) {
        if self.base_content != self.content() {
            self.base_content = self.content().to_owned();
        }
        self.last_saved = Some(at);
    }

    pub fn content(&self) -> &str {
        self.history.current()
    }

    pub fn base_content(&self) -> &str {
        &self.base_content
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// True iff the content differs from the last saved content
    pub fn is_dirty(&self) -> bool {
        self.content() != self.base_content
    }

    /// Whether a SAVE would do anything visible
    pub fn needs_save(&self) -> bool {
        self.is_dirty() || self.last_saved.is_none()
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    pub fn history_limit(&self) -> usize {
        self.history.max_size()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The persisted subset of this editor
    pub fn to_blob(&self) -> StoredBlob {
        StoredBlob {
            content: self.content().to_owned(),
            history: self.history.entries().to_vec(),
            history_index: self.history.index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_new_is_clean() {
        let state = EditorState::new("hello");
        assert_eq!(state.content(), "hello");
        assert_eq!(state.history(), ["hello"]);
        assert_eq!(state.history_index(), 0);
        assert!(!state.is_dirty());
        assert!(state.last_saved().is_none());
    }

    #[test]
    fn test_set_content_marks_dirty() {
        let mut state = EditorState::new("a");
        assert!(state.set_content("ab"));
        assert!(state.is_dirty());
        assert_eq!(state.history_index(), 1);
    }

    #[test]
    fn test_set_same_content_is_noop() {
        let mut state = EditorState::new("a");
        assert!(!state.set_content("a"));
        assert_eq!(state.history().len(), 1);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_edit_back_to_base_is_clean() {
        let mut state = EditorState::new("a");
        state.set_content("ab");
        state.set_content("a");

        assert!(!state.is_dirty());
        assert_eq!(state.history(), ["a", "ab", "a"]);
    }

    #[test]
    fn test_undo_redo_at_bounds_are_noops() {
        let mut state = EditorState::new("a");
        assert!(!state.undo());
        assert!(!state.redo());
        assert_eq!(state.content(), "a");
    }

    #[test]
    fn test_save_sets_base_and_timestamp() {
        let mut state = EditorState::new("x");
        state.set_content("xy");
        state.save_at(at(100));

        assert!(!state.is_dirty());
        assert_eq!(state.base_content(), "xy");
        assert_eq!(state.last_saved(), Some(at(100)));
        assert_eq!(state.history(), ["x", "xy"]);
    }

    #[test]
    fn test_undo_after_save_is_dirty() {
        let mut state = EditorState::new("x");
        state.set_content("xy");
        state.save_at(at(1));

        state.undo();
        assert_eq!(state.content(), "x");
        assert!(state.is_dirty());

        state.redo();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_init_resets_history() {
        let mut state = EditorState::with_history_limit("a", 5);
        state.set_content("ab");
        state.save_at(at(1));

        state.init("other", false);
        assert_eq!(state.history(), ["other"]);
        assert!(!state.is_dirty());
        assert!(state.last_saved().is_none());
        assert_eq!(state.history_limit(), 5);
    }

    #[test]
    fn test_init_can_keep_last_saved() {
        let mut state = EditorState::new("a");
        state.save_at(at(7));
        state.init("a", true);
        assert_eq!(state.last_saved(), Some(at(7)));
    }

    #[test]
    fn test_needs_save() {
        let mut state = EditorState::new("");
        assert!(state.needs_save());
        state.save_at(at(1));
        assert!(!state.needs_save());
        state.set_content("x");
        assert!(state.needs_save());
    }

    #[test]
    fn test_to_blob_and_restore() {
        let mut state = EditorState::new("a");
        state.set_content("ab");
        state.set_content("abc");
        state.undo();

        let blob = state.to_blob();
        assert_eq!(blob.content, "ab");
        assert_eq!(blob.history_index, 1);

        let restored = EditorState::restore(blob, 100);
        assert_eq!(restored.content(), "ab");
        assert_eq!(restored.history(), ["a", "ab", "abc"]);
        assert!(restored.can_redo());
        assert!(!restored.is_dirty());
    }

    #[test]
    fn test_restore_inconsistent_blob_starts_fresh() {
        let blob = StoredBlob {
            content: "zzz".to_string(),
            history: vec!["a".to_string(), "b".to_string()],
            history_index: 1,
        };
        let restored = EditorState::restore(blob, 100);
        assert_eq!(restored.content(), "zzz");
        assert_eq!(restored.history(), ["zzz"]);
    }
}
