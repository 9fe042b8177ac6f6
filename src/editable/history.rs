//! Linear snapshot history (undo/redo) for the editing state machine.
//!
//! Unlike an operation log, every entry is a full copy of the document text
//! at an edit boundary. The cursor (`index`) always points at the entry that
//! matches the editor's current content.

/// Default upper bound on the number of snapshots kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Bounded history of content snapshots, oldest first.
///
/// Never empty: it is always created from an initial snapshot, so
/// `index < entries.len()` holds for every reachable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHistory {
    entries: Vec<String>,
    index: usize,
    max_size: usize,
}

impl ContentHistory {
    /// Create a history holding a single snapshot
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_max_size(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history with the specified max size (clamped to at least 1)
    pub fn with_max_size(initial: impl Into<String>, max_size: usize) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Rebuild a history from untrusted parts (e.g. a decoded draft).
    ///
    /// Adjacent duplicates are collapsed, the index is clamped, and the
    /// result is trimmed to `max_size`. Returns `None` when the snapshot at
    /// the resulting index does not equal `current`.
    pub fn from_parts(
        entries: Vec<String>,
        index: usize,
        current: &str,
        max_size: usize,
    ) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let index = index.min(entries.len() - 1);

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        let mut new_index = 0;
        for (i, entry) in entries.into_iter().enumerate() {
            if deduped.last() != Some(&entry) {
                deduped.push(entry);
            }
            if i == index {
                new_index = deduped.len() - 1;
            }
        }

        if deduped[new_index] != current {
            return None;
        }

        let mut history = Self {
            entries: deduped,
            index: new_index,
            max_size: max_size.max(1),
        };
        history.enforce_limit();
        Some(history)
    }

    /// The snapshot at the current position
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Record a new snapshot.
    ///
    /// Any redo branch past the current position is discarded. Returns
    /// `false` (and changes nothing) if `snapshot` equals the current entry.
    pub fn push(&mut self, snapshot: String) -> bool {
        if self.current() == snapshot {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
        self.enforce_limit();
        true
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // Oldest snapshots go first; if the cursor itself would be dropped the
    // redo tail is cut instead.
    fn enforce_limit(&mut self) {
        if self.entries.len() <= self.max_size {
            return;
        }
        let excess = self.entries.len() - self.max_size;
        let front = excess.min(self.index);
        if front > 0 {
            self.entries.drain(..front);
            self.index -= front;
        }
        self.entries.truncate(self.max_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(items: &[&str]) -> ContentHistory {
        let mut history = ContentHistory::new(items[0]);
        for item in &items[1..] {
            history.push(item.to_string());
        }
        history
    }

    #[test]
    fn test_push_moves_index_to_end() {
        let history = history_of(&["a", "ab", "abc"]);
        assert_eq!(history.entries(), ["a", "ab", "abc"]);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current(), "abc");
    }

    #[test]
    fn test_push_identical_is_noop() {
        let mut history = history_of(&["a", "ab"]);
        assert!(!history.push("ab".to_string()));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_undo_redo() {
        let mut history = history_of(&["a", "ab"]);

        assert_eq!(history.undo(), Some("a"));
        assert!(history.undo().is_none());
        assert!(history.can_redo());

        assert_eq!(history.redo(), Some("ab"));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_discards_redo_branch() {
        let mut history = history_of(&["a", "ab", "abc"]);
        history.undo();
        history.push("abx".to_string());

        assert_eq!(history.entries(), ["a", "ab", "abx"]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut history = ContentHistory::with_max_size("0", 3);
        for i in 1..5 {
            history.push(i.to_string());
        }

        assert_eq!(history.entries(), ["2", "3", "4"]);
        assert_eq!(history.index(), 2);
    }

    #[test]
    fn test_max_size_clamped_to_one() {
        let mut history = ContentHistory::with_max_size("a", 0);
        history.push("b".to_string());

        assert_eq!(history.entries(), ["b"]);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_from_parts_collapses_duplicates() {
        let entries = vec!["a".into(), "a".into(), "b".into(), "b".into(), "c".into()];
        let history = ContentHistory::from_parts(entries, 3, "b", 100).unwrap();

        assert_eq!(history.entries(), ["a", "b", "c"]);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_from_parts_clamps_index() {
        let entries = vec!["a".into(), "b".into()];
        let history = ContentHistory::from_parts(entries, 99, "b", 100).unwrap();
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        let entries = vec!["a".into(), "b".into()];
        assert!(ContentHistory::from_parts(entries, 0, "b", 100).is_none());
        assert!(ContentHistory::from_parts(Vec::new(), 0, "", 100).is_none());
    }

    #[test]
    fn test_from_parts_trims_keeping_cursor() {
        let entries: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        let history = ContentHistory::from_parts(entries, 1, "1", 3).unwrap();

        // One old snapshot dropped, then the redo tail cut
        assert_eq!(history.entries(), ["1", "2", "3"]);
        assert_eq!(history.current(), "1");
    }
}
