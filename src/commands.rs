//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Write the active entry and the editor draft.
    ///
    /// Carries no payload: the runtime encodes whatever the editor holds
    /// when the command runs, so a stale snapshot is never written.
    Persist,
    /// Write the entry list (after create/delete/switch)
    StoreJournal,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine two optional commands
    pub fn and(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, cmd) | (cmd, None) => cmd,
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }
}
