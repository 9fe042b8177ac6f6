//! Journal entries - one free-form text entry per calendar day
//!
//! The entry list is stored as JSON under [`ENTRIES_KEY`]:
//!
//! ```text
//! [{"id":"…uuid…","date":"2024-03-01T08:15:00Z","content":"…"}, …]
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key for the entry list
pub const ENTRIES_KEY: &str = "typein-entries";

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    /// Creation time; the entry belongs to this calendar day
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub content: String,
}

impl Entry {
    /// Create an empty entry dated `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: now,
            content: String::new(),
        }
    }

    /// Calendar day of this entry in `tz`
    pub fn day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.date.with_timezone(tz).date_naive()
    }

    /// First line of the content, for listings
    pub fn title(&self) -> &str {
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

/// Boundary between the editor and whatever owns entry content.
pub trait EntryStore {
    /// Text of the entry currently being edited
    fn active_document_text(&self) -> String;

    /// Record new content for entry `id`
    fn persist(&mut self, id: Uuid, content: &str);
}

/// The ordered entry collection, newest first, with one active entry.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<Entry>,
    active: Option<Uuid>,
}

impl Journal {
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut journal = Self {
            entries,
            active: None,
        };
        journal.sort();
        journal.active = journal.entries.first().map(|e| e.id);
        journal
    }

    /// Load the entry list from storage.
    ///
    /// Missing or unparsable data yields an empty journal; read errors
    /// are propagated.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StorageError> {
        let Some(raw) = store.get(ENTRIES_KEY)? else {
            tracing::debug!("No saved entries, starting empty journal");
            return Ok(Self::default());
        };
        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                tracing::info!("Loaded {} journal entries", entries.len());
                Ok(Self::new(entries))
            }
            Err(e) => {
                tracing::warn!("Failed to parse saved entries: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Write the entry list to storage
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries).map_err(|e| {
            StorageError::Unavailable(format!("failed to serialize entries: {}", e))
        })?;
        store.set(ENTRIES_KEY, &json)
    }

    /// Make sure an entry exists for the calendar day of `now` in `tz`, and
    /// activate it. Returns `true` if a new entry was created.
    pub fn ensure_today<Tz: TimeZone>(&mut self, now: DateTime<Utc>, tz: &Tz) -> bool {
        let today = now.with_timezone(tz).date_naive();
        if let Some(entry) = self.entries.iter().find(|e| e.day(tz) == today) {
            self.active = Some(entry.id);
            return false;
        }
        self.create_entry(now);
        true
    }

    /// Add an empty entry at the front and activate it
    pub fn create_entry(&mut self, now: DateTime<Utc>) -> Uuid {
        let entry = Entry::new(now);
        let id = entry.id;
        tracing::debug!("Created entry {}", id);
        self.entries.insert(0, entry);
        self.active = Some(id);
        id
    }

    /// Activate an existing entry. Returns `false` if `id` is unknown.
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Remove an entry.
    ///
    /// Deleting the active entry activates the newest remaining one; deleting
    /// the last entry leaves a fresh empty entry dated `now` in its place.
    pub fn delete(&mut self, id: Uuid, now: DateTime<Utc>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }

        if self.entries.is_empty() {
            self.create_entry(now);
        } else if self.active == Some(id) {
            self.active = self.entries.first().map(|e| e.id);
        }
        true
    }

    /// Replace the content of entry `id`. Returns `false` if `id` is unknown.
    pub fn update_content(&mut self, id: Uuid, content: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                if entry.content != content {
                    entry.content = content.to_string();
                }
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn active(&self) -> Option<&Entry> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by full id or unambiguous id prefix
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Entry> {
        let prefix = prefix.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.to_string().starts_with(&prefix));
        let first = matches.next()?;
        matches.next().is_none().then_some(first)
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

impl EntryStore for Journal {
    fn active_document_text(&self) -> String {
        self.active()
            .map(|e| e.content.clone())
            .unwrap_or_default()
    }

    fn persist(&mut self, id: Uuid, content: &str) {
        if !self.update_content(id, content) {
            tracing::warn!("Dropping content for unknown entry {}", id);
        }
    }
}
