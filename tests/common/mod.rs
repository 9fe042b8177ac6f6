//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use typein::config::{AutosavePolicy, JournalConfig};
use typein::model::{AppModel, Journal};
use typein::runtime::Session;
use typein::storage::MemoryStore;

/// A fixed instant: 2024-03-01 09:00 UTC
pub fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Create a model editing a single entry holding `content`
pub fn test_model(content: &str) -> AppModel {
    test_model_with(content, JournalConfig::default())
}

pub fn test_model_with(content: &str, config: JournalConfig) -> AppModel {
    let mut journal = Journal::default();
    let id = journal.create_entry(morning());
    journal.update_content(id, content);
    AppModel::new(journal, config)
}

pub fn manual_config() -> JournalConfig {
    JournalConfig {
        autosave: AutosavePolicy::Manual,
        ..Default::default()
    }
}

/// Open a session on an in-memory store at [`morning`]
pub fn test_session(store: MemoryStore, config: JournalConfig) -> Session<MemoryStore> {
    Session::open_at(store, config, morning(), &Utc).unwrap()
}
