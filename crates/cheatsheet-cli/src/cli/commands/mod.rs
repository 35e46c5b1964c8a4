//! CLI command handlers.

pub mod config;
pub mod entries;
pub mod list;
pub mod open;
pub mod search;
pub mod show;

use anyhow::Result;
use cheatsheet_core::config::Config;
use cheatsheet_core::source::FileLoader;
use cheatsheet_core::store::LoadRecordsResult;
use cheatsheet_core::{Record, ResolveError, load_all_with};

/// Rebuilds the pool from the configured sources, keeping load warnings.
fn load_pool(config: &Config) -> LoadRecordsResult {
    load_all_with(&FileLoader, &config.source_paths())
}

/// Picks the record for an optional id, falling back to the configured
/// default id and then to the first record.
fn resolve_record<'a>(
    loaded: &'a LoadRecordsResult,
    config: &Config,
    id: Option<&str>,
) -> Result<&'a Record> {
    let id = id
        .filter(|id| !id.is_empty())
        .or_else(|| config.effective_default_id());
    loaded
        .pool
        .resolve(id)
        .map_err(|err| with_load_hint(err, loaded.warnings.len()))
}

/// Mentions skipped sources in a resolution error.
fn with_load_hint(err: ResolveError, skipped: usize) -> anyhow::Error {
    match skipped {
        0 => err.into(),
        1 => anyhow::anyhow!("{err} (1 source could not be loaded; run with -v for details)"),
        n => anyhow::anyhow!("{err} ({n} sources could not be loaded; run with -v for details)"),
    }
}
