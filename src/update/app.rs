//! App message handlers (save results, exit flush)

use super::{autosave, request_save};
use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle session-level messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SaveCompleted { content, result } => {
            model.save_pending = false;
            match result {
                Ok(at) if content == model.editor.content() => {
                    model.editor.save_at(at);
                    None
                }
                Ok(_) => {
                    // The editor moved on while this save was in flight
                    tracing::debug!("Save superseded by newer content");
                    autosave(model)
                }
                Err(e) => {
                    // Stays dirty; the next edit or flush retries
                    tracing::warn!("Failed to save entry: {}", e);
                    None
                }
            }
        }

        AppMsg::Flush => {
            if model.editor.is_dirty() {
                request_save(model)
            } else {
                None
            }
        }
    }
}
