//! Open command handler: presents a record the way it asks to be shown.

use anyhow::Result;
use cheatsheet_core::config::Config;
use cheatsheet_core::{DisplayMode, flatten};

use super::show::ShowOptions;

pub fn run(config: &Config, id: Option<&str>, color: bool) -> Result<()> {
    let loaded = super::load_pool(config);
    let record = super::resolve_record(&loaded, config, id)?;
    tracing::debug!(id = %record.id, display = record.display.as_str(), "opening cheatsheet");

    match record.display {
        DisplayMode::Float => super::show::render(
            config,
            record,
            ShowOptions {
                color,
                ..ShowOptions::default()
            },
        ),
        DisplayMode::Telescope => super::entries::print(&flatten(record), false),
    }
}
