//! Text utilities for page layout.
//!
//! Padding and centering are measured in terminal columns (unicode-aware) so
//! wide characters keep columns aligned. Highlight offsets are never derived
//! from these widths; they are measured in bytes on the assembled line.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Pads `text` with trailing spaces up to `width` columns.
///
/// Text that already fills the width is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let mut padded = String::with_capacity(text.len() + width);
    padded.push_str(text);
    padded.push_str(&" ".repeat(width.saturating_sub(text.width())));
    padded
}

/// Splits the free space around `content_width` inside `width`.
///
/// Returns `(left, right)`. An odd column goes to the left side.
pub fn center_padding(content_width: usize, width: usize) -> (usize, usize) {
    let free = width.saturating_sub(content_width);
    (free.div_ceil(2), free / 2)
}

/// Fills `text` with `fill` characters up to `width` columns.
pub fn fill_to(text: &str, fill: char, width: usize) -> String {
    let mut filled = text.to_string();
    for _ in text.width()..width {
        filled.push(fill);
    }
    filled
}
