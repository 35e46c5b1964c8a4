//! Search command handler.

use anyhow::{Context, Result};
use cheatsheet_core::config::Config;
use cheatsheet_core::flatten;
use cheatsheet_render::filter_entries;

use crate::clipboard::Clipboard;

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions<'a> {
    pub query: &'a str,
    pub id: Option<&'a str>,
    pub limit: Option<usize>,
    pub copy: bool,
    pub json: bool,
}

pub fn run(config: &Config, options: SearchOptions<'_>) -> Result<()> {
    let loaded = super::load_pool(config);
    let record = super::resolve_record(&loaded, config, options.id)?;
    let entries = flatten(record);

    let mut matches = filter_entries(&entries, options.query);
    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }

    let Some(best) = matches.first() else {
        if options.copy {
            anyhow::bail!("no entries match '{}'", options.query);
        }
        println!("No matching entries.");
        return Ok(());
    };
    let best_key = entries[best.index].key.clone();

    let matched: Vec<_> = matches
        .iter()
        .map(|m| entries[m.index].clone())
        .collect();
    super::entries::print(&matched, options.json)?;

    if options.copy {
        Clipboard::copy(&best_key).context("copy key to clipboard")?;
        eprintln!("Copied '{best_key}' to clipboard");
    }
    Ok(())
}
