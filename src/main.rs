use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use typein::cli::{CliArgs, StorageLocation};
use typein::config::JournalConfig;
use typein::console;
use typein::messages::Msg;
use typein::runtime::Session;
use typein::storage::{FileStore, KeyValueStore, MemoryStore};

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<()> {
    typein::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let config = match &startup.config_path {
        Some(path) => JournalConfig::load_from(path),
        None => JournalConfig::load(),
    };

    let store: Box<dyn KeyValueStore> = match &startup.storage {
        StorageLocation::Memory => Box::new(MemoryStore::new()),
        StorageLocation::Directory(dir) => Box::new(
            FileStore::open(dir).with_context(|| format!("Failed to open {}", dir.display()))?,
        ),
        StorageLocation::Default => {
            let dir = config
                .resolved_data_dir()
                .context("No data directory available; pass --data-dir")?;
            Box::new(
                FileStore::open(&dir)
                    .with_context(|| format!("Failed to open {}", dir.display()))?,
            )
        }
    };

    let mut session = Session::open(store, config).context("Failed to open journal")?;

    if let Some(prefix) = &startup.entry {
        let id = console::resolve_entry(&session, prefix)?;
        session.dispatch(Msg::select_entry(id));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = console::run(&mut session, startup.command, stdin.lock(), &mut stdout);

    // Never leave edits behind, even when the command failed
    session.flush();
    result
}
