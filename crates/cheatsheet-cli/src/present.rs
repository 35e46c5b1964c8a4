//! Terminal presenter for rendered pages.
//!
//! Maps highlight tags to crossterm styles. Without color the page is
//! written as plain text, byte for byte.

use std::io::{self, IsTerminal, Write};

use cheatsheet_render::{HighlightTag, StyledLine};
use crossterm::style::{ContentStyle, Stylize};

/// Whether stdout output should carry ANSI styling.
pub fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn tag_style(tag: HighlightTag) -> ContentStyle {
    let style = ContentStyle::new();
    match tag {
        HighlightTag::Banner => style.cyan().bold(),
        HighlightTag::Section => style.yellow().bold(),
        HighlightTag::Key => style.green(),
        HighlightTag::Value => style.magenta(),
        HighlightTag::Note => style.dark_grey().italic(),
        HighlightTag::Footer => style.dark_grey(),
    }
}

pub fn write_lines(out: &mut impl Write, lines: &[StyledLine], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            match span.tag.filter(|_| color) {
                Some(tag) => write!(out, "{}", tag_style(tag).apply(&span.text))?,
                None => out.write_all(span.text.as_bytes())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
