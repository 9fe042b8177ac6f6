//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! editing state transitions and storage.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=editor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=typein::codec=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/typein/logs/typein.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::EditorState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so it
/// never mixes with entry text printed on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "typein.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A test harness may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of editor state for diffing.
///
/// Holds sizes and positions only, never entry text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTrace {
    pub content_len: usize,
    pub history_len: usize,
    pub history_index: usize,
    pub dirty: bool,
    pub history_matches_content: bool,
    pub adjacent_duplicates: bool,
}

impl EditorTrace {
    pub fn from_editor(editor: &EditorState) -> Self {
        let history = editor.history();
        Self {
            content_len: editor.content().len(),
            history_len: history.len(),
            history_index: editor.history_index(),
            dirty: editor.is_dirty(),
            history_matches_content: history.get(editor.history_index()).map(String::as_str)
                == Some(editor.content()),
            adjacent_duplicates: history.windows(2).any(|w| w[0] == w[1]),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditorTrace) -> Option<String> {
        let mut changes = Vec::new();
        if self.content_len != other.content_len {
            changes.push(format!(
                "content: {} → {} bytes",
                self.content_len, other.content_len
            ));
        }
        if self.history_len != other.history_len || self.history_index != other.history_index {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.history_index, self.history_len, other.history_index, other.history_len
            ));
        }
        if self.dirty != other.dirty {
            changes.push(format!("dirty: {} → {}", self.dirty, other.dirty));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Panic in debug builds if a transition broke a history invariant
    pub fn assert_invariants(&self, context: &str) {
        debug_assert!(
            self.history_matches_content,
            "[{}] history cursor does not match content",
            context
        );
        debug_assert!(
            !self.adjacent_duplicates,
            "[{}] history has adjacent duplicate snapshots",
            context
        );
    }
}
