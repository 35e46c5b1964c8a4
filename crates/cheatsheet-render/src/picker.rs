//! Fuzzy filtering of flattened entries.

use cheatsheet_core::flatten::FlatEntry;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A matched entry with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMatch {
    /// Index into the filtered slice.
    pub index: usize,
    /// Match score (higher = better match). None for unfiltered results.
    pub score: Option<i64>,
}

/// Filters entries by a fuzzy pattern over their search text.
///
/// A blank pattern keeps every entry in its original order. Otherwise only
/// matching entries are returned, best first; ties keep entry order.
pub fn filter_entries(entries: &[FlatEntry], pattern: &str) -> Vec<EntryMatch> {
    if pattern.trim().is_empty() {
        return (0..entries.len())
            .map(|index| EntryMatch { index, score: None })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(pattern, CaseMatching::Ignore, Normalization::Smart);
    let mut buf = Vec::new();

    let mut matches: Vec<EntryMatch> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let text = entry.search_text();
            let haystack = Utf32Str::new(&text, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| EntryMatch {
                    index,
                    score: Some(i64::from(score)),
                })
        })
        .collect();

    // Stable sort keeps entry order among equal scores
    matches.sort_by_key(|m| std::cmp::Reverse(m.score.unwrap_or(i64::MIN)));
    matches
}
