//! Flattened, search-oriented view of a record.

use serde::Serialize;

use crate::model::{Record, SectionType};

/// One entry carrying the context of its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatEntry {
    pub section: String,
    pub key: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub arrow: bool,
    #[serde(rename = "type")]
    pub kind: SectionType,
}

impl FlatEntry {
    /// Text a fuzzy matcher should score against.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {} {}", self.section, self.key, self.desc);
        if let Some(note) = self.note.as_deref().filter(|note| !note.is_empty()) {
            text.push(' ');
            text.push_str(note);
        }
        text
    }
}

/// Emits one [`FlatEntry`] per entry, in section order then entry order.
pub fn flatten(record: &Record) -> Vec<FlatEntry> {
    record
        .sections
        .iter()
        .flat_map(|section| {
            section.entries.iter().map(move |entry| FlatEntry {
                section: section.name.clone(),
                key: entry.key.clone(),
                desc: entry.desc.clone(),
                note: entry.note.clone(),
                arrow: entry.arrow,
                kind: section.kind,
            })
        })
        .collect()
}
