//! Session runtime - runs `update` and performs its commands
//!
//! Everything is synchronous: a dispatched message is processed, the
//! resulting commands are executed against the store, and their completion
//! messages are fed back through `update` before `dispatch` returns.

use std::collections::VecDeque;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::codec::{PersistenceCodec, StoredBlob, DRAFT_KEY};
use crate::commands::Cmd;
use crate::config::JournalConfig;
use crate::editable::EditorState;
use crate::messages::{AppMsg, Msg};
use crate::model::{AppModel, EntryStore, Journal};
use crate::status::StatusLine;
use crate::storage::{KeyValueStore, StorageError};
use crate::update::update;

/// A journal editing session over a key-value store
pub struct Session<S: KeyValueStore> {
    model: AppModel,
    store: S,
    codec: PersistenceCodec,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session on today's entry (local calendar day)
    pub fn open(store: S, config: JournalConfig) -> Result<Self, StorageError> {
        Self::open_at(store, config, Utc::now(), &Local)
    }

    /// Open a session as of `now`, with calendar days taken in `tz`
    pub fn open_at<Tz: TimeZone>(
        store: S,
        config: JournalConfig,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Result<Self, StorageError> {
        let mut journal = Journal::load(&store)?;
        let created = journal.ensure_today(now, tz);

        let mut session = Self {
            model: AppModel::new(journal, config),
            store,
            codec: PersistenceCodec::new(),
        };

        if session.model.config.restore_history {
            session.restore_draft();
        }
        if created {
            session.run(Cmd::StoreJournal);
        }
        Ok(session)
    }

    /// Process a message and every command that follows from it
    pub fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.execute(cmd, &mut queue);
            }
        }
    }

    /// Write unsaved changes, if any
    pub fn flush(&mut self) {
        self.dispatch(Msg::App(AppMsg::Flush));
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn editor(&self) -> &EditorState {
        &self.model.editor
    }

    pub fn journal(&self) -> &Journal {
        &self.model.journal
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn status(&self, now: DateTime<Utc>) -> StatusLine {
        StatusLine::from_editor(&self.model.editor, now)
    }

    /// The draft currently in storage, if readable
    pub fn stored_draft(&self) -> Option<StoredBlob> {
        match self.store.get(DRAFT_KEY) {
            Ok(stored) => stored.and_then(|s| self.codec.decode(&s)),
            Err(e) => {
                tracing::warn!("Failed to read draft: {}", e);
                None
            }
        }
    }

    fn run(&mut self, cmd: Cmd) {
        let mut queue = VecDeque::new();
        self.execute(cmd, &mut queue);
        while let Some(msg) = queue.pop_front() {
            self.dispatch(msg);
        }
    }

    fn execute(&mut self, cmd: Cmd, queue: &mut VecDeque<Msg>) {
        match cmd {
            Cmd::None => {}
            Cmd::Persist => queue.push_back(self.persist()),
            Cmd::StoreJournal => {
                if let Err(e) = self.model.journal.save(&mut self.store) {
                    tracing::warn!("Failed to store entries: {}", e);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd, queue);
                }
            }
        }
    }

    /// Write the current snapshot and report the outcome as a message
    fn persist(&mut self) -> Msg {
        let content = self.model.editor.content().to_owned();
        let result = match self.write_snapshot(&content) {
            Ok(()) => {
                tracing::debug!("Saved entry ({} bytes)", content.len());
                Ok(Utc::now())
            }
            Err(e) => Err(e.to_string()),
        };
        Msg::App(AppMsg::SaveCompleted { content, result })
    }

    fn write_snapshot(&mut self, content: &str) -> Result<(), StorageError> {
        if let Some(id) = self.model.journal.active_id() {
            self.model.journal.persist(id, content);
        }
        self.model.journal.save(&mut self.store)?;

        let draft = self.codec.encode(&self.model.editor.to_blob());
        self.store.set(DRAFT_KEY, &draft)
    }

    fn restore_draft(&mut self) {
        let Some(blob) = self.stored_draft() else {
            return;
        };
        if blob.content != self.model.editor.content() {
            tracing::debug!("Stored draft belongs to another entry, ignoring");
            return;
        }
        let limit = self.model.config.history_limit;
        self.model.editor = EditorState::restore(blob, limit);
        tracing::info!(
            "Restored {} undo snapshots from draft",
            self.model.editor.history().len()
        );
    }
}
