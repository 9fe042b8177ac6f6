//! Journal message handlers (create, switch, delete entries)

use super::autosave;
use crate::commands::Cmd;
use crate::messages::JournalMsg;
use crate::model::AppModel;

/// Handle entry collection messages.
///
/// Every switch first folds unsaved editor text into the outgoing entry, so
/// the re-INIT that follows never loses an edit.
pub fn update_journal(model: &mut AppModel, msg: JournalMsg) -> Option<Cmd> {
    match msg {
        JournalMsg::NewEntry(now) => {
            model.commit_active();
            model.journal.create_entry(now);
            model.load_active(false);
            Some(Cmd::StoreJournal)
        }

        JournalMsg::SelectEntry(id) => {
            let previous = model.journal.active_id();
            if previous == Some(id) {
                return None;
            }
            if model.journal.get(id).is_none() {
                tracing::warn!("Cannot select unknown entry {}", id);
                return None;
            }
            let committed = model.commit_active();
            model.journal.select(id);
            model.load_active(false);
            committed.then_some(Cmd::StoreJournal)
        }

        JournalMsg::DeleteEntry { id, now } => {
            let previous = model.journal.active_id();
            if previous != Some(id) {
                model.commit_active();
            }
            if !model.journal.delete(id, now) {
                tracing::warn!("Cannot delete unknown entry {}", id);
                return None;
            }
            if model.journal.active_id() != previous {
                model.load_active(false);
                return Some(Cmd::StoreJournal);
            }
            Cmd::and(Some(Cmd::StoreJournal), autosave(model))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JournalConfig;
    use crate::model::Journal;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn model_with_two() -> (AppModel, Uuid, Uuid) {
        let mut journal = Journal::default();
        let older = journal.create_entry(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        journal.update_content(older, "older");
        let newer = journal.create_entry(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap());
        journal.update_content(newer, "newer");
        (AppModel::new(journal, JournalConfig::default()), older, newer)
    }

    #[test]
    fn test_select_reinitializes_editor() {
        let (mut model, older, _) = model_with_two();
        model.editor.set_content("newer!");

        let cmd = update_journal(&mut model, JournalMsg::SelectEntry(older));

        assert_eq!(cmd, Some(Cmd::StoreJournal));
        assert_eq!(model.editor.content(), "older");
        assert_eq!(model.editor.history(), ["older"]);
        assert!(!model.editor.is_dirty());
    }

    #[test]
    fn test_select_commits_unsaved_text() {
        let (mut model, older, newer) = model_with_two();
        model.editor.set_content("newer!");

        update_journal(&mut model, JournalMsg::SelectEntry(older));
        assert_eq!(model.journal.get(newer).unwrap().content, "newer!");
    }

    #[test]
    fn test_select_clean_switch_writes_nothing() {
        let (mut model, older, _) = model_with_two();
        assert_eq!(update_journal(&mut model, JournalMsg::SelectEntry(older)), None);
        assert_eq!(model.editor.content(), "older");
    }

    #[test]
    fn test_select_same_or_unknown_is_noop() {
        let (mut model, _, newer) = model_with_two();
        model.editor.set_content("typing");

        assert_eq!(update_journal(&mut model, JournalMsg::SelectEntry(newer)), None);
        assert_eq!(
            update_journal(&mut model, JournalMsg::SelectEntry(Uuid::new_v4())),
            None
        );
        assert_eq!(model.editor.content(), "typing");
    }

    #[test]
    fn test_new_entry_starts_empty() {
        let (mut model, _, _) = model_with_two();
        let cmd = update_journal(&mut model, JournalMsg::NewEntry(Utc::now()));

        assert_eq!(cmd, Some(Cmd::StoreJournal));
        assert_eq!(model.journal.len(), 3);
        assert_eq!(model.editor.content(), "");
        assert!(model.editor.last_saved().is_none());
    }

    #[test]
    fn test_delete_active_loads_next() {
        let (mut model, older, newer) = model_with_two();
        let cmd = update_journal(
            &mut model,
            JournalMsg::DeleteEntry {
                id: newer,
                now: Utc::now(),
            },
        );

        assert_eq!(cmd, Some(Cmd::StoreJournal));
        assert_eq!(model.journal.active_id(), Some(older));
        assert_eq!(model.editor.content(), "older");
    }

    #[test]
    fn test_delete_other_keeps_editor() {
        let (mut model, older, _) = model_with_two();
        model.editor.set_content("still typing");

        let cmd = update_journal(
            &mut model,
            JournalMsg::DeleteEntry {
                id: older,
                now: Utc::now(),
            },
        );
        assert_eq!(
            cmd,
            Some(Cmd::Batch(vec![Cmd::StoreJournal, Cmd::Persist]))
        );
        assert_eq!(model.editor.content(), "still typing");
        assert!(model.editor.is_dirty());
    }
}
