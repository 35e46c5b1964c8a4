//! Per-section-type layout strategies.
//!
//! Each strategy appends lines to a [`LineBuffer`] and tags the byte ranges
//! where keys, values and notes land. Offsets are measured on the assembled
//! line, so slicing a line by one of its highlights yields the original text.

use cheatsheet_core::model::{Entry, Section, SectionType};

use crate::buffer::{HighlightTag, LineBuffer};
use crate::text::pad_right;

/// Width of each cell in the two-column plugins grid.
pub const PLUGIN_COLUMN_WIDTH: usize = 40;
const PLUGIN_KEY_WIDTH: usize = 14;
const KEYBINDING_KEY_WIDTH: usize = 18;

const INDENT: &str = "  ";
const SETTINGS_SEPARATOR: &str = "    ";
const KEYBINDING_GAP: &str = "    ";
const ARROW: &str = "-> ";

/// Lays out a section with the strategy matching its type.
pub fn layout_section(buf: &mut LineBuffer, section: &Section) {
    match section.kind {
        SectionType::Plugins => layout_plugins(buf, &section.entries),
        SectionType::Settings => layout_settings(buf, &section.entries),
        SectionType::Keybinding => layout_keybindings(buf, &section.entries),
    }
}

/// Two entries per line in a fixed two-column grid.
pub fn layout_plugins(buf: &mut LineBuffer, entries: &[Entry]) {
    for pair in entries.chunks(2) {
        let first = &pair[0];
        let left = format!(
            "{INDENT}{} {}",
            pad_right(&first.key, PLUGIN_KEY_WIDTH),
            first.desc
        );
        let mut line = pad_right(&left, PLUGIN_COLUMN_WIDTH);
        let right_start = line.len();
        if let Some(second) = pair.get(1) {
            line.push_str(&pad_right(&second.key, PLUGIN_KEY_WIDTH));
            line.push(' ');
            line.push_str(&second.desc);
        }

        buf.append(line, None).tag_range(
            HighlightTag::Key,
            INDENT.len(),
            INDENT.len() + first.key.len(),
        );
        if let Some(second) = pair.get(1) {
            buf.tag_range(
                HighlightTag::Key,
                right_start,
                right_start + second.key.len(),
            );
        }
    }
}

/// Up to three `key: value` items per line; values are highlighted.
pub fn layout_settings(buf: &mut LineBuffer, entries: &[Entry]) {
    for row in entries.chunks(3) {
        // (parts, value spans, column where the next part starts)
        let (parts, spans, _) = row.iter().fold(
            (Vec::with_capacity(3), Vec::with_capacity(3), INDENT.len()),
            |(mut parts, mut spans, col), entry| {
                let part = format!("{}: {}", entry.key, entry.desc);
                let start = col + entry.key.len() + 2;
                spans.push((start, start + entry.desc.len()));
                let next = col + part.len() + SETTINGS_SEPARATOR.len();
                parts.push(part);
                (parts, spans, next)
            },
        );

        buf.append(format!("{INDENT}{}", parts.join(SETTINGS_SEPARATOR)), None);
        for (start, end) in spans {
            buf.tag_range(HighlightTag::Value, start, end);
        }
    }
}

/// One entry per line: key, optional arrow, description, optional note.
pub fn layout_keybindings(buf: &mut LineBuffer, entries: &[Entry]) {
    for entry in entries {
        let note = entry.note.as_deref();

        let mut line = format!(
            "{INDENT}{}{KEYBINDING_GAP}",
            pad_right(&entry.key, KEYBINDING_KEY_WIDTH)
        );
        if entry.arrow {
            line.push_str(ARROW);
        }
        line.push_str(&entry.desc);
        if let Some(note) = note {
            line.push(' ');
            line.push_str(note);
        }

        buf.append(line, None).tag_range(
            HighlightTag::Key,
            INDENT.len(),
            INDENT.len() + entry.key.len(),
        );

        if let Some(note) = note {
            let end = buf.last_line_len();
            buf.tag_range(HighlightTag::Note, end - note.len(), end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Highlight, PageOutput};

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry::new(format!("key{i}"), format!("value number {i}")))
            .collect()
    }

    fn render(f: fn(&mut LineBuffer, &[Entry]), entries: &[Entry]) -> PageOutput {
        let mut buf = LineBuffer::new();
        f(&mut buf, entries);
        buf.into_output()
    }

    fn tagged<'a>(output: &'a PageOutput, tag: HighlightTag) -> Vec<&'a str> {
        output
            .highlights
            .iter()
            .filter(|h| h.tag == tag)
            .map(|h| output.highlighted_text(h).unwrap())
            .collect()
    }

    #[test]
    fn test_plugins_line_count() {
        for n in 0..8 {
            let output = render(layout_plugins, &entries(n));
            assert_eq!(output.lines.len(), n.div_ceil(2), "n = {n}");
        }
    }

    #[test]
    fn test_plugins_grid_columns() {
        let output = render(
            layout_plugins,
            &[Entry::new("telescope", "finder"), Entry::new("oil", "files")],
        );

        let line = &output.lines[0];
        assert!(line.starts_with(&format!("  {} finder", pad_right("telescope", 14))));
        assert_eq!(&line[40..], format!("{} files", pad_right("oil", 14)));
        assert_eq!(
            output.highlights,
            vec![
                Highlight {
                    line: 1,
                    tag: HighlightTag::Key,
                    start: 2,
                    end: crate::buffer::ColumnEnd::At(11),
                },
                Highlight {
                    line: 1,
                    tag: HighlightTag::Key,
                    start: 40,
                    end: crate::buffer::ColumnEnd::At(43),
                },
            ]
        );
    }

    #[test]
    fn test_plugins_odd_count_pads_left_cell_to_column_width() {
        let output = render(
            layout_plugins,
            &[
                Entry::new("a", "A"),
                Entry::new("bb", "B"),
                Entry::new("ccc", "C"),
            ],
        );

        assert_eq!(output.lines.len(), 2);
        let last = &output.lines[1];
        assert_eq!(last.len(), PLUGIN_COLUMN_WIDTH);
        assert_eq!(last, &pad_right(&format!("  {} C", pad_right("ccc", 14)), 40));
        assert_eq!(tagged(&output, HighlightTag::Key), ["a", "bb", "ccc"]);
    }

    #[test]
    fn test_plugins_wide_left_cell_keeps_key_offsets() {
        let output = render(
            layout_plugins,
            &[
                Entry::new("中文", "a description that is long enough to overflow"),
                Entry::new("next", "x"),
            ],
        );
        assert_eq!(tagged(&output, HighlightTag::Key), ["中文", "next"]);
    }

    #[test]
    fn test_settings_line_count_and_values() {
        for n in 0..10 {
            let input = entries(n);
            let output = render(layout_settings, &input);
            assert_eq!(output.lines.len(), n.div_ceil(3), "n = {n}");

            let values: Vec<&str> = input.iter().map(|e| e.desc.as_str()).collect();
            assert_eq!(tagged(&output, HighlightTag::Value), values, "n = {n}");
        }
    }

    #[test]
    fn test_settings_line_format() {
        let output = render(
            layout_settings,
            &[
                Entry::new("tabstop", "4"),
                Entry::new("number", "true"),
                Entry::new("wrap", "false"),
                Entry::new("spell", "off"),
            ],
        );

        assert_eq!(output.lines[0], "  tabstop: 4    number: true    wrap: false");
        assert_eq!(output.lines[1], "  spell: off");
        let starts: Vec<usize> = output.highlights.iter().map(|h| h.start).collect();
        assert_eq!(starts, [11, 24, 38, 9]);
    }

    #[test]
    fn test_settings_empty_values() {
        let output = render(layout_settings, &[Entry::new("k", ""), Entry::new("", "v")]);
        assert_eq!(output.lines[0], "  k:     : v");
        assert_eq!(tagged(&output, HighlightTag::Value), ["", "v"]);
    }

    #[test]
    fn test_keybinding_one_line_per_entry() {
        for n in 0..6 {
            let input = entries(n);
            let output = render(layout_keybindings, &input);
            assert_eq!(output.lines.len(), n);

            let keys: Vec<&str> = input.iter().map(|e| e.key.as_str()).collect();
            assert_eq!(tagged(&output, HighlightTag::Key), keys);
        }
    }

    #[test]
    fn test_keybinding_note_is_highlighted_at_line_end() {
        let output = render(
            layout_keybindings,
            &[Entry::new("gd", "go to def").with_note("(lsp)")],
        );

        let line = &output.lines[0];
        assert_eq!(line, &format!("  {}    go to def (lsp)", pad_right("gd", 18)));
        let note = output
            .highlights
            .iter()
            .find(|h| h.tag == HighlightTag::Note)
            .unwrap();
        assert_eq!(note.start, line.len() - 5);
        assert_eq!(note.end, crate::buffer::ColumnEnd::At(line.len()));
        assert_eq!(output.highlighted_text(note), Some("(lsp)"));
    }

    #[test]
    fn test_keybinding_empty_note_keeps_suffix_and_span() {
        let output = render(layout_keybindings, &[Entry::new("K", "hover").with_note("")]);

        let line = &output.lines[0];
        assert!(line.ends_with("hover "));
        let note = output
            .highlights
            .iter()
            .find(|h| h.tag == HighlightTag::Note)
            .unwrap();
        assert_eq!(note.start, line.len());
        assert_eq!(output.highlighted_text(note), Some(""));
    }

    #[test]
    fn test_keybinding_arrow_prefix() {
        let output = render(
            layout_keybindings,
            &[Entry::new("<leader>ff", "find files").with_arrow()],
        );
        assert!(output.lines[0].ends_with("    -> find files"));
        assert_eq!(tagged(&output, HighlightTag::Note), Vec::<&str>::new());
    }

    #[test]
    fn test_layout_section_dispatches_on_kind() {
        let section = Section::new("opts", SectionType::Settings, entries(4));
        let mut buf = LineBuffer::new();
        layout_section(&mut buf, &section);
        assert_eq!(buf.len(), 2);

        let section = Section::new("keys", SectionType::default(), entries(4));
        let mut buf = LineBuffer::new();
        layout_section(&mut buf, &section);
        assert_eq!(buf.len(), 4);
    }
}
