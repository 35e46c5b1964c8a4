//! Config command handlers.

use anyhow::{Context, Result};
use cheatsheet_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn generate() -> Result<()> {
    let toml = config::Config::generate()?;
    print!("{toml}");
    Ok(())
}

pub fn add_source(source: &str) -> Result<()> {
    let source = source.trim();
    if source.is_empty() {
        anyhow::bail!("source path must not be empty");
    }

    let config_path = config::paths::config_path();
    let added = config::Config::add_source_to(&config_path, source)
        .with_context(|| format!("add source to {}", config_path.display()))?;
    if added {
        println!("Added source {source} to {}", config_path.display());
    } else {
        println!("Source {source} is already configured");
    }
    Ok(())
}
