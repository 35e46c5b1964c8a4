//! Entries command handler.

use std::io::Write;

use anyhow::{Context, Result};
use cheatsheet_core::config::Config;
use cheatsheet_core::{FlatEntry, flatten};

pub fn run(config: &Config, id: Option<&str>, json: bool) -> Result<()> {
    let loaded = super::load_pool(config);
    let record = super::resolve_record(&loaded, config, id)?;
    print(&flatten(record), json)
}

pub fn print(entries: &[FlatEntry], json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, entries).context("serialize entries")?;
        writeln!(stdout)?;
    } else {
        for entry in entries {
            writeln!(stdout, "{}", entry_line(entry))?;
        }
    }
    Ok(())
}

/// Tab-separated `section  key  desc  [note]`.
pub(super) fn entry_line(entry: &FlatEntry) -> String {
    let arrow = if entry.arrow { "-> " } else { "" };
    let mut line = format!("{}\t{}\t{arrow}{}", entry.section, entry.key, entry.desc);
    if let Some(note) = entry.note.as_deref().filter(|note| !note.is_empty()) {
        line.push('\t');
        line.push_str(note);
    }
    line
}
