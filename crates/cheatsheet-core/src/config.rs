//! Configuration management for cheatsheet.
//!
//! Loads configuration from ${CHEATSHEET_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for cheatsheet configuration and sources.
    //!
    //! CHEATSHEET_HOME resolution order:
    //! 1. CHEATSHEET_HOME environment variable (if set)
    //! 2. ~/.config/cheatsheet (default)

    use std::path::{Path, PathBuf};

    /// Returns the cheatsheet home directory.
    pub fn cheatsheet_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHEATSHEET_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_default()
            .join(".config")
            .join("cheatsheet")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        cheatsheet_home().join("config.toml")
    }

    /// Expands a leading `~` to the user's home directory.
    pub fn expand_home(path: &str) -> PathBuf {
        let home = dirs::home_dir();
        expand_home_with(path, home.as_deref())
    }

    pub(crate) fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
        match (path, home) {
            ("~", Some(home)) => home.to_path_buf(),
            (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
            (path, _) => PathBuf::from(path),
        }
    }
}

/// Page rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Total page width in columns.
    pub width: usize,
    /// Hint centered on the last line of the page.
    pub footer_hint: String,
}

impl PageConfig {
    pub const DEFAULT_WIDTH: usize = 81;
    pub const DEFAULT_FOOTER_HINT: &str = "press q or <Esc> to close";
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            footer_hint: Self::DEFAULT_FOOTER_HINT.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered cheatsheet source paths.
    pub sources: Vec<String>,

    /// Cheatsheet id to use when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_id: Option<String>,

    /// Page rendering configuration.
    #[serde(default)]
    pub page: PageConfig,
}

impl Config {
    const DEFAULT_SOURCE: &str = "cheatsheets.toml";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the configured sources as paths, in order.
    ///
    /// `~` is expanded and relative paths are resolved against
    /// CHEATSHEET_HOME. An empty list falls back to the default source.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.source_paths_in(&paths::cheatsheet_home())
    }

    fn source_paths_in(&self, base: &Path) -> Vec<PathBuf> {
        let sources: Vec<&str> = self
            .sources
            .iter()
            .map(|source| source.trim())
            .filter(|source| !source.is_empty())
            .collect();
        let sources = if sources.is_empty() {
            vec![Self::DEFAULT_SOURCE]
        } else {
            sources
        };

        sources
            .into_iter()
            .map(|source| {
                let path = paths::expand_home(source);
                if path.is_absolute() {
                    path
                } else {
                    base.join(path)
                }
            })
            .collect()
    }

    /// Returns the default id, if one is configured and non-blank.
    pub fn effective_default_id(&self) -> Option<&str> {
        self.default_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate() -> Result<String> {
        let generated_toml =
            toml::to_string(&Config::default()).context("Failed to serialize default config to TOML")?;
        merge_with_template(&generated_toml)
    }

    /// Appends a source to the config file at the given path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    /// Returns `false` if the source was already listed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, parsed or written.
    pub fn add_source_to(path: &Path, source: &str) -> Result<bool> {
        use toml_edit::{Array, DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        let mut sources = doc
            .get("sources")
            .and_then(|item| item.as_array())
            .cloned()
            .unwrap_or_else(Array::new);

        if sources.iter().any(|existing| existing.as_str() == Some(source)) {
            return Ok(false);
        }
        sources.push(source);
        doc["sources"] = value(sources);

        Self::write_config(path, &doc.to_string())?;
        Ok(true)
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![Self::DEFAULT_SOURCE.to_string()],
            default_id: None,
            page: PageConfig::default(),
        }
    }
}
