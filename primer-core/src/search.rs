//! Character search

/// Result of scanning a string for one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSearch {
    /// Character index of the first match
    pub first: Option<usize>,

    /// Total number of matches
    pub occurrences: usize,
}

/// Find the first position of `c` in `s` and count how often it occurs
///
/// Positions count characters, not bytes.
pub fn find_char(s: &str, c: char) -> CharSearch {
    let mut first = None;
    let mut occurrences = 0;

    for (i, ch) in s.chars().enumerate() {
        if ch == c {
            first.get_or_insert(i);
            occurrences += 1;
        }
    }

    CharSearch { first, occurrences }
}
