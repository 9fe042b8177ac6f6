//! Command-line argument parsing for the journal
//!
//! Supports:
//! - Interactive editing of today's entry (default)
//! - One-shot write/append/show/list/status
//! - Creating and deleting entries
//! - Choosing the data directory or an in-memory store

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A minimal daily journal
#[derive(Parser, Debug)]
#[command(name = "typein", version, about = "A minimal daily journal")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding entries and the draft
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Work on this entry (id or unique id prefix) instead of today's
    #[arg(short = 'e', long, value_name = "ID", global = true)]
    pub entry: Option<String>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Edit interactively, one line at a time (default)
    Edit,
    /// Print the entry
    Show,
    /// List all entries, newest first
    List,
    /// Print word count and save state
    Status,
    /// Replace the entry's text
    Write { text: String },
    /// Append a line to the entry
    Append { text: String },
    /// Start a new entry
    New,
    /// Delete an entry by id or unique id prefix
    Delete { id: String },
}

/// Where entries are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// Data dir from config, else the platform default
    Default,
    /// Explicit directory
    Directory(PathBuf),
    /// Nothing persisted
    Memory,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub command: Command,
    pub storage: StorageLocation,
    pub config_path: Option<PathBuf>,
    pub entry: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let storage = match (self.ephemeral, self.data_dir) {
            (true, Some(_)) => {
                return Err("--ephemeral cannot be combined with --data-dir".to_string())
            }
            (true, None) => StorageLocation::Memory,
            (false, Some(dir)) => StorageLocation::Directory(dir),
            (false, None) => StorageLocation::Default,
        };

        if matches!(&self.command, Some(Command::Delete { id }) if id.trim().is_empty()) {
            return Err("Entry id must not be empty".to_string());
        }

        Ok(StartupConfig {
            command: self.command.unwrap_or(Command::Edit),
            storage,
            config_path: self.config,
            entry: self.entry,
        })
    }
}
