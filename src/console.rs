//! Console front end: runs one CLI command against a session

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::{Local, Utc};

use crate::cli::Command;
use crate::messages::Msg;
use crate::prompt::{PromptInput, HELP};
use crate::runtime::Session;
use crate::status::word_count;
use crate::storage::KeyValueStore;

/// Execute `command`, reading prompt input from `input` and writing to `out`
pub fn run<S, R, W>(session: &mut Session<S>, command: Command, input: R, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Edit => edit(session, input, out)?,

        Command::Show => {
            write!(out, "{}", session.editor().content())?;
            if !session.editor().content().ends_with('\n') {
                writeln!(out)?;
            }
        }

        Command::List => list(session, out)?,

        Command::Status => writeln!(out, "{}", session.status(Utc::now()))?,

        Command::Write { text } => {
            session.dispatch(Msg::set_content(text));
            finish_write(session)?;
        }

        Command::Append { text } => {
            session.dispatch(Msg::append(format!("{}\n", text)));
            finish_write(session)?;
        }

        Command::New => {
            session.flush();
            session.dispatch(Msg::new_entry());
            let id = session
                .journal()
                .active_id()
                .context("New entry was not activated")?;
            writeln!(out, "{}", id)?;
        }

        Command::Delete { id } => {
            let id = resolve_entry(session, &id)?;
            session.flush();
            session.dispatch(Msg::delete_entry(id));
            writeln!(out, "Deleted {}", short_id(&id.to_string()))?;
        }
    }
    Ok(())
}

/// Resolve an id or unique id prefix to an entry id
pub fn resolve_entry<S: KeyValueStore>(session: &Session<S>, prefix: &str) -> Result<uuid::Uuid> {
    session
        .journal()
        .find_by_prefix(prefix)
        .map(|e| e.id)
        .with_context(|| format!("No single entry matches {:?}", prefix))
}

fn edit<S, R, W>(session: &mut Session<S>, input: R, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if let Some(entry) = session.journal().active() {
        writeln!(
            out,
            "Editing entry for {} (:help for commands)",
            entry.date.with_timezone(&Local).format("%B %-d, %Y")
        )?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let parsed = match PromptInput::parse(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        let could_undo = session.editor().can_undo();
        let could_redo = session.editor().can_redo();
        if let Some(msg) = parsed.to_msg() {
            session.dispatch(msg);
        }
        match parsed {
            PromptInput::Show => write!(out, "{}", session.editor().content())?,
            PromptInput::Status => writeln!(out, "{}", session.status(Utc::now()))?,
            PromptInput::Help => writeln!(out, "{}", HELP)?,
            PromptInput::Undo if !could_undo => writeln!(out, "Nothing to undo")?,
            PromptInput::Redo if !could_redo => writeln!(out, "Nothing to redo")?,
            PromptInput::Quit => break,
            _ => {}
        }
        out.flush()?;
    }

    session.flush();
    if session.editor().is_dirty() {
        bail!("Could not save the entry; see the log for details");
    }
    Ok(())
}

fn list<S: KeyValueStore, W: Write>(session: &Session<S>, out: &mut W) -> Result<()> {
    let active = session.journal().active_id();
    for entry in session.journal().entries() {
        let id = entry.id.to_string();
        writeln!(
            out,
            "{} {}  {}  {:>5} words  {}",
            if Some(entry.id) == active { '*' } else { ' ' },
            short_id(&id),
            entry.date.with_timezone(&Local).format("%Y-%m-%d"),
            word_count(&entry.content),
            entry.title()
        )?;
    }
    Ok(())
}

fn finish_write<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    session.flush();
    if session.editor().is_dirty() {
        bail!("Could not save the entry");
    }
    Ok(())
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}
