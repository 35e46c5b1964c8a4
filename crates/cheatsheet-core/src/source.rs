//! Source loading: one file in, a list of records out.

use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use crate::model::SourceDocument;

/// Serialization format of a source file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Yaml,
    Json,
}

impl SourceFormat {
    /// Picks the format from the file extension; anything unknown is TOML.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => SourceFormat::Yaml,
            Some("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Toml => "toml",
            SourceFormat::Yaml => "yaml",
            SourceFormat::Json => "json",
        }
    }
}

/// Why a source contributed no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Missing file, permission error, invalid UTF-8.
    Unreadable(io::ErrorKind),
    /// The content does not match the record shape.
    Malformed,
}

/// Error raised by a [`SourceLoader`] for a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub path: PathBuf,
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    fn unreadable(path: &Path, err: &io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: SourceErrorKind::Unreadable(err.kind()),
            message: format!("Failed to read cheatsheet source: {err}"),
        }
    }

    fn malformed(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: SourceErrorKind::Malformed,
            message: message.into(),
        }
    }

    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind == SourceErrorKind::Unreadable(io::ErrorKind::NotFound)
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for SourceError {}

/// Parses one configured source into records.
pub trait SourceLoader {
    /// # Errors
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<SourceDocument, SourceError>;
}

/// Reads sources from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl SourceLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let content = fs::read_to_string(path).map_err(|e| SourceError::unreadable(path, &e))?;
        parse_str(&content, SourceFormat::from_path(path))
            .map_err(|message| SourceError::malformed(path, message))
    }
}

/// Parses source content in the given format.
///
/// # Errors
/// Returns a human-readable message when the content is malformed.
pub fn parse_str(content: &str, format: SourceFormat) -> Result<SourceDocument, String> {
    let content = strip_utf8_bom(content);
    match format {
        SourceFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        SourceFormat::Yaml => {
            if content.trim().is_empty() {
                return Ok(SourceDocument::default());
            }
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        }
        SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
    .map_err(|e| format!("Failed to parse {} cheatsheet source: {e}", format.as_str()))
}

fn strip_utf8_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}
