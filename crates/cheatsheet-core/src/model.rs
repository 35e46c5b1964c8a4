//! Cheatsheet records as produced by the source loader.
//!
//! Records are immutable once loaded. Enum-valued fields are normalized at
//! deserialization time so rendering never re-checks raw strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One line item of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display label (may be empty).
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub desc: String,
    /// Trailing annotation, rendered after the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Renders a "points-to" prefix before the description.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub arrow: bool,
}

impl Entry {
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_arrow(mut self) -> Self {
        self.arrow = true;
        self
    }
}

/// Layout strategy of a section.
///
/// Unknown or missing values fall back to [`SectionType::Keybinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
    /// Short items laid out two per line.
    Plugins,
    /// `key: value` items laid out three per line.
    Settings,
    /// One binding per line.
    #[default]
    Keybinding,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Plugins => "plugins",
            SectionType::Settings => "settings",
            SectionType::Keybinding => "keybinding",
        }
    }
}

impl From<String> for SectionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "plugins" => SectionType::Plugins,
            "settings" => SectionType::Settings,
            _ => SectionType::Keybinding,
        }
    }
}

impl From<SectionType> for String {
    fn from(value: SectionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named, typed group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: SectionType,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<String>, kind: SectionType, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            kind,
            entries,
        }
    }
}

/// Which presenter the caller should use for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMode {
    /// Rendered page in a floating window.
    Float,
    /// Flattened entries handed to a fuzzy picker.
    #[default]
    Telescope,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Float => "float",
            DisplayMode::Telescope => "telescope",
        }
    }
}

impl From<String> for DisplayMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "float" => DisplayMode::Float,
            _ => DisplayMode::Telescope,
        }
    }
}

impl From<DisplayMode> for String {
    fn from(value: DisplayMode) -> Self {
        value.as_str().to_string()
    }
}

/// One complete cheatsheet definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub display: DisplayMode,
    pub sections: Vec<Section>,
}

impl Record {
    pub const DEFAULT_TITLE: &str = "CHEATSHEET";

    pub fn new(id: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: id.into(),
            title: Self::DEFAULT_TITLE.to_string(),
            display: DisplayMode::default(),
            sections,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Default value for serde when title is missing.
fn default_title() -> String {
    Record::DEFAULT_TITLE.to_string()
}

/// The shape a single source parses into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    pub cheatsheets: Vec<Record>,
}
