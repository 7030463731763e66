//! Lexicographic comparison of two lines

use std::cmp::Ordering;

/// Outcome of comparing two lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComparison {
    /// First line
    pub first: String,

    /// Second line
    pub second: String,

    /// Both lines were empty
    pub both_empty: bool,

    /// Byte-wise ordering of `first` relative to `second`
    pub ordering: Ordering,
}

impl LineComparison {
    /// Human-readable result, one message per line
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if self.both_empty {
            out.push("Strings are empty.".to_string());
        }
        out.push(match self.ordering {
            Ordering::Equal => format!(
                "Strings {} and {} are equal.",
                self.first, self.second
            ),
            Ordering::Less => format!("String {} is less than {}", self.first, self.second),
            Ordering::Greater => format!("String {} is less than {}", self.second, self.first),
        });
        out
    }
}

/// Compare two lines in dictionary order
pub fn compare_lines(first: &str, second: &str) -> LineComparison {
    LineComparison {
        first: first.to_string(),
        second: second.to_string(),
        both_empty: first.is_empty() && second.is_empty(),
        ordering: first.cmp(second),
    }
}
