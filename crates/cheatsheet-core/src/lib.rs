//! Core cheatsheet library (records, sources, resolution, config).

pub mod config;
pub mod flatten;
pub mod model;
pub mod source;
pub mod store;

pub use flatten::{FlatEntry, flatten};
pub use model::{DisplayMode, Entry, Record, Section, SectionType, SourceDocument};
pub use store::{RecordPool, ResolveError, load_all, load_all_with};
