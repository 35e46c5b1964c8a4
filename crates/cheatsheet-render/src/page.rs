//! Full page composition: banner, sections and footer.

use cheatsheet_core::config::PageConfig;
use cheatsheet_core::model::Record;

use crate::buffer::{HighlightTag, LineBuffer, PageOutput};
use crate::layout::layout_section;
use crate::text::{center_padding, display_width, fill_to};

/// Builds the display artifact of a record.
///
/// Building is pure: the same record and settings always give the same page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBuilder {
    width: usize,
    footer_hint: String,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self {
            width: PageConfig::DEFAULT_WIDTH,
            footer_hint: PageConfig::DEFAULT_FOOTER_HINT.to_string(),
        }
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            width: config.width,
            footer_hint: config.footer_hint.clone(),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_footer_hint(mut self, hint: impl Into<String>) -> Self {
        self.footer_hint = hint.into();
        self
    }

    /// Columns covered by banner and divider lines.
    fn content_width(&self) -> usize {
        self.width.saturating_sub(1)
    }

    pub fn build(&self, record: &Record) -> PageOutput {
        let mut buf = LineBuffer::new();

        self.push_banner(&mut buf, &record.title);

        for section in &record.sections {
            buf.append(self.divider(&section.name), Some(HighlightTag::Section));
            layout_section(&mut buf, section);
            buf.blank();
        }

        buf.append(self.footer(), Some(HighlightTag::Footer));
        buf.into_output()
    }

    fn push_banner(&self, buf: &mut LineBuffer, title: &str) {
        let inner = self.width.saturating_sub(3);
        let border = format!("+{}+", "=".repeat(inner));
        let (left, right) = center_padding(display_width(title), inner);
        let title_line = format!("|{}{title}{}|", " ".repeat(left), " ".repeat(right));

        buf.append(border.clone(), Some(HighlightTag::Banner))
            .append(title_line, Some(HighlightTag::Banner))
            .append(border, Some(HighlightTag::Banner))
            .blank();
    }

    fn divider(&self, name: &str) -> String {
        fill_to(&format!("--- {name} "), '-', self.content_width())
    }

    fn footer(&self) -> String {
        let left = self.width.saturating_sub(display_width(&self.footer_hint)) / 2;
        format!("{}{}", " ".repeat(left), self.footer_hint)
    }
}
