//! List command handler.

use anyhow::Result;
use cheatsheet_core::config::Config;
use cheatsheet_core::load_all;

pub fn run(config: &Config) -> Result<()> {
    let pool = load_all(&config.source_paths());
    if pool.is_empty() {
        println!("No cheatsheets found.");
    } else {
        for id in pool.list_ids() {
            println!("{id}");
        }
    }
    Ok(())
}
