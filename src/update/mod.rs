//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod editor;
mod journal;

use crate::commands::Cmd;
use crate::config::AutosavePolicy;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::EditorTrace;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use editor::update_editor;
pub use journal::update_journal;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Journal(m) => journal::update_journal(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Issue a save unless one is already in flight
pub(crate) fn request_save(model: &mut AppModel) -> Option<Cmd> {
    if model.save_pending {
        tracing::trace!("Save already pending, coalescing");
        return None;
    }
    model.save_pending = true;
    Some(Cmd::Persist)
}

/// Autosave hook run after every content-changing transition
pub(crate) fn autosave(model: &mut AppModel) -> Option<Cmd> {
    match model.config.autosave {
        AutosavePolicy::Immediate if model.editor.is_dirty() => request_save(model),
        _ => None,
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after editor state and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = EditorTrace::from_editor(&model.editor);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = EditorTrace::from_editor(&model.editor);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "editor", %diff, "state changed");
    }
    after.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type, without document text
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, EditorMsg, JournalMsg};

    match msg {
        Msg::Editor(EditorMsg::SetContent(text)) => {
            format!("Editor::SetContent({} bytes)", text.len())
        }
        Msg::Editor(EditorMsg::Append(text)) => format!("Editor::Append({} bytes)", text.len()),
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Journal(JournalMsg::NewEntry(_)) => "Journal::NewEntry".to_string(),
        Msg::Journal(JournalMsg::SelectEntry(id)) => format!("Journal::SelectEntry({})", id),
        Msg::Journal(JournalMsg::DeleteEntry { id, .. }) => {
            format!("Journal::DeleteEntry({})", id)
        }
        Msg::App(AppMsg::SaveCompleted { result, .. }) => {
            format!("App::SaveCompleted(ok={})", result.is_ok())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
