//! Page layout and highlighting for cheatsheet records.
//!
//! Everything here is pure: records go in, lines and highlight spans come
//! out. Presenters decide what the tags look like.

pub mod buffer;
pub mod layout;
pub mod page;
pub mod picker;
pub mod styled;
pub mod text;

pub use buffer::{ColumnEnd, Highlight, HighlightTag, LineBuffer, PageOutput};
pub use page::PageBuilder;
pub use picker::{EntryMatch, filter_entries};
pub use styled::{StyledLine, StyledSpan};
