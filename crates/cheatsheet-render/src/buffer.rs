//! Append-only line buffer with highlight spans.
//!
//! Layouts write lines through [`LineBuffer`] and tag byte ranges on the line
//! they just wrote. The buffer never hands out mutable access to earlier
//! lines, so a highlight always refers to text that already exists.

use std::fmt;

use serde::{Serialize, Serializer};

/// Semantic highlight identifiers (presenter-agnostic).
///
/// These are translated to actual colors by whoever displays the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightTag {
    /// Title banner lines.
    Banner,
    /// Section divider line.
    Section,
    /// Entry key.
    Key,
    /// Setting value.
    Value,
    /// Trailing entry note.
    Note,
    /// Footer hint (dim).
    Footer,
}

impl HighlightTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightTag::Banner => "CheatsheetBanner",
            HighlightTag::Section => "CheatsheetSection",
            HighlightTag::Key => "CheatsheetKey",
            HighlightTag::Value => "CheatsheetValue",
            HighlightTag::Note => "CheatsheetNote",
            HighlightTag::Footer => "CheatsheetFooter",
        }
    }
}

impl fmt::Display for HighlightTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for HighlightTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// End column of a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEnd {
    /// Exclusive byte offset into the line.
    At(usize),
    /// Through the end of the line. Serialized as `-1`.
    EndOfLine,
}

impl ColumnEnd {
    /// Resolves the end offset against a line of `line_len` bytes.
    pub fn resolve(self, line_len: usize) -> usize {
        match self {
            ColumnEnd::At(end) => end.min(line_len),
            ColumnEnd::EndOfLine => line_len,
        }
    }
}

impl Serialize for ColumnEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnEnd::At(end) => serializer.serialize_i64(*end as i64),
            ColumnEnd::EndOfLine => serializer.serialize_i64(-1),
        }
    }
}

/// A highlight over already-emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// 1-based line index.
    pub line: usize,
    pub tag: HighlightTag,
    /// Byte offset where the span starts.
    #[serde(rename = "col_start")]
    pub start: usize,
    #[serde(rename = "col_end")]
    pub end: ColumnEnd,
}

/// Lines and highlights of a finished page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOutput {
    pub lines: Vec<String>,
    pub highlights: Vec<Highlight>,
}

impl PageOutput {
    /// Returns the text a highlight covers, or `None` if its line is missing.
    pub fn highlighted_text(&self, highlight: &Highlight) -> Option<&str> {
        let line = self.lines.get(highlight.line.checked_sub(1)?)?;
        let end = highlight.end.resolve(line.len());
        line.get(highlight.start.min(end)..end)
    }
}

/// Append-only builder of lines and highlights.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    highlights: Vec<Highlight>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line, optionally highlighting all of it.
    pub fn append(&mut self, text: impl Into<String>, tag: Option<HighlightTag>) -> &mut Self {
        self.lines.push(text.into());
        if let Some(tag) = tag {
            self.highlights.push(Highlight {
                line: self.lines.len(),
                tag,
                start: 0,
                end: ColumnEnd::EndOfLine,
            });
        }
        self
    }

    /// Appends an empty, untagged line.
    pub fn blank(&mut self) -> &mut Self {
        self.append(String::new(), None)
    }

    /// Highlights `[start, end)` bytes of the last line.
    ///
    /// The range is clipped to the line: `end` is clamped to the line length
    /// and `start` to `end`. Does nothing when no line has been written yet.
    pub fn tag_range(&mut self, tag: HighlightTag, start: usize, end: usize) -> &mut Self {
        let Some(line_len) = self.lines.last().map(String::len) else {
            return self;
        };
        let end = end.min(line_len);
        self.highlights.push(Highlight {
            line: self.lines.len(),
            tag,
            start: start.min(end),
            end: ColumnEnd::At(end),
        });
        self
    }

    /// Byte length of the most recently appended line (0 when empty).
    pub fn last_line_len(&self) -> usize {
        self.lines.last().map_or(0, String::len)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read-only view of the accumulated lines and highlights.
    pub fn output(&self) -> (&[String], &[Highlight]) {
        (&self.lines, &self.highlights)
    }

    pub fn into_output(self) -> PageOutput {
        PageOutput {
            lines: self.lines,
            highlights: self.highlights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_with_tag_covers_whole_line() {
        let mut buf = LineBuffer::new();
        buf.append("title", Some(HighlightTag::Banner)).append("plain", None);

        let (lines, highlights) = buf.output();
        assert_eq!(lines, ["title", "plain"]);
        assert_eq!(
            highlights,
            [Highlight {
                line: 1,
                tag: HighlightTag::Banner,
                start: 0,
                end: ColumnEnd::EndOfLine,
            }]
        );
    }

    #[test]
    fn test_tag_range_targets_last_line() {
        let mut buf = LineBuffer::new();
        buf.append("first", None)
            .append("  gd  go", None)
            .tag_range(HighlightTag::Key, 2, 4);

        let output = buf.into_output();
        assert_eq!(output.highlights[0].line, 2);
        assert_eq!(output.highlighted_text(&output.highlights[0]), Some("gd"));
    }

    #[test]
    fn test_tag_range_clips_to_line() {
        let mut buf = LineBuffer::new();
        buf.append("abc", None).tag_range(HighlightTag::Note, 1, 10);
        buf.tag_range(HighlightTag::Note, 7, 9);

        let (_, highlights) = buf.output();
        assert_eq!((highlights[0].start, highlights[0].end), (1, ColumnEnd::At(3)));
        assert_eq!((highlights[1].start, highlights[1].end), (3, ColumnEnd::At(3)));
    }

    #[test]
    fn test_last_line_len_is_bytes() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.last_line_len(), 0);
        buf.append("é", None);
        assert_eq!(buf.last_line_len(), 2);
    }

    #[test]
    fn test_blank_line_has_no_highlight() {
        let mut buf = LineBuffer::new();
        buf.blank();
        assert_eq!(buf.len(), 1);
        assert!(buf.output().1.is_empty());
    }

    #[test]
    fn test_serializes_end_of_line_as_minus_one() {
        let mut buf = LineBuffer::new();
        buf.append("--- git ---", Some(HighlightTag::Section))
            .tag_range(HighlightTag::Key, 4, 7);

        let value = serde_json::to_value(buf.into_output()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "lines": ["--- git ---"],
                "highlights": [
                    {"line": 1, "tag": "CheatsheetSection", "col_start": 0, "col_end": -1},
                    {"line": 1, "tag": "CheatsheetKey", "col_start": 4, "col_end": 7}
                ]
            })
        );
    }
}
