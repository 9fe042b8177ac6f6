//! typein - a minimal local-first daily journal
//!
//! This crate provides the editing state machine, the draft persistence
//! codec and the Elm-style session around them.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod console;
pub mod editable;
pub mod messages;
pub mod model;
pub mod prompt;
pub mod runtime;
pub mod status;
pub mod storage;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use codec::{PersistenceCodec, StoredBlob};
pub use commands::Cmd;
pub use config::JournalConfig;
pub use editable::EditorState;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Session;
