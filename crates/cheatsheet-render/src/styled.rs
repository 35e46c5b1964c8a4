//! Projection of a page into styled lines.
//!
//! Presenters that do not want to deal with byte offsets consume
//! [`StyledLine`]s instead: each line is cut into consecutive spans, each
//! carrying at most one tag.

use crate::buffer::{HighlightTag, PageOutput};

/// A run of text sharing one highlight (UI-agnostic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub tag: Option<HighlightTag>,
}

/// A line of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Creates an empty line.
    pub fn empty() -> Self {
        StyledLine { spans: vec![] }
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl PageOutput {
    /// Splits every line at its highlight boundaries.
    ///
    /// Where highlights overlap, the one registered last wins.
    pub fn styled_lines(&self) -> Vec<StyledLine> {
        let mut per_line: Vec<Vec<Option<HighlightTag>>> = self
            .lines
            .iter()
            .map(|line| vec![None; line.len()])
            .collect();

        for highlight in &self.highlights {
            let Some(tags) = highlight
                .line
                .checked_sub(1)
                .and_then(|index| per_line.get_mut(index))
            else {
                continue;
            };
            let end = highlight.end.resolve(tags.len());
            let start = highlight.start.min(end);
            tags[start..end].fill(Some(highlight.tag));
        }

        self.lines
            .iter()
            .zip(per_line)
            .map(|(line, tags)| split_line(line, &tags))
            .collect()
    }
}

fn split_line(line: &str, tags: &[Option<HighlightTag>]) -> StyledLine {
    let mut spans: Vec<StyledSpan> = Vec::new();

    for (offset, ch) in line.char_indices() {
        let tag = tags[offset];
        match spans.last_mut() {
            Some(span) if span.tag == tag => span.text.push(ch),
            _ => spans.push(StyledSpan {
                text: ch.to_string(),
                tag,
            }),
        }
    }

    StyledLine { spans }
}
