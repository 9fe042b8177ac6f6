//! Editor message handlers (content, undo/redo, save)

use super::{autosave, request_save};
use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::AppModel;

/// Handle editing messages for the active entry
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let changed = match msg {
        EditorMsg::SetContent(content) => model.editor.set_content(content),
        EditorMsg::Append(text) => {
            if text.is_empty() {
                false
            } else {
                let content = format!("{}{}", model.editor.content(), text);
                model.editor.set_content(content)
            }
        }
        EditorMsg::Undo => model.editor.undo(),
        EditorMsg::Redo => model.editor.redo(),
        EditorMsg::Save => {
            return if model.editor.needs_save() {
                request_save(model)
            } else {
                None
            };
        }
    };

    if changed {
        autosave(model)
    } else {
        None
    }
}
