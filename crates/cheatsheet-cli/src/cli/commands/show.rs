//! Show command handler.

use std::io::Write;

use anyhow::{Context, Result};
use cheatsheet_core::Record;
use cheatsheet_core::config::Config;
use cheatsheet_render::PageBuilder;

use crate::present;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
    pub json: bool,
    pub width: Option<usize>,
    pub color: bool,
}

pub fn run(config: &Config, id: Option<&str>, options: ShowOptions) -> Result<()> {
    let loaded = super::load_pool(config);
    let record = super::resolve_record(&loaded, config, id)?;
    render(config, record, options)
}

pub fn render(config: &Config, record: &Record, options: ShowOptions) -> Result<()> {
    let mut builder = PageBuilder::from_config(&config.page);
    if let Some(width) = options.width {
        builder = builder.with_width(width);
    }
    let page = builder.build(record);

    let mut stdout = std::io::stdout().lock();
    if options.json {
        serde_json::to_writer_pretty(&mut stdout, &page).context("serialize page")?;
        writeln!(stdout)?;
    } else {
        present::write_lines(&mut stdout, &page.styled_lines(), options.color)
            .context("write page")?;
    }
    Ok(())
}
