//! Editing state machine for journal entries.
//!
//! # Architecture
//!
//! - [`ContentHistory`]: bounded list of content snapshots with a cursor
//! - [`EditorState`]: content, dirty tracking and save timestamp layered on
//!   top of the history
//!
//! # Example
//!
//! ```
//! use typein::editable::EditorState;
//!
//! let mut state = EditorState::new("a");
//! state.set_content("ab");
//! state.set_content("abc");
//! state.undo();
//! state.set_content("abx");
//!
//! assert_eq!(state.content(), "abx");
//! assert_eq!(state.history(), ["a", "ab", "abx"]);
//! ```

mod history;
mod state;

pub use history::{ContentHistory, DEFAULT_HISTORY_LIMIT};
pub use state::EditorState;
