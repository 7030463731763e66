//! Consecutive-run counting
//!
//! Feeds values one at a time and hands back each run as soon as the next
//! value differs, so callers can print while still reading.

/// Counts how many consecutive times each value appears
#[derive(Debug, Clone)]
pub struct RunCounter<T> {
    current: Option<(T, usize)>,
}

impl<T: PartialEq> RunCounter<T> {
    /// Create an empty counter
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Record one value; returns the finished run when the value changes
    pub fn push(&mut self, value: T) -> Option<(T, usize)> {
        if let Some((current, count)) = &mut self.current {
            if *current == value {
                *count += 1;
                return None;
            }
        }
        self.current.replace((value, 1))
    }

    /// Flush the run in progress
    pub fn finish(&mut self) -> Option<(T, usize)> {
        self.current.take()
    }

    /// True when no value has been pushed since the last flush
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

impl<T: PartialEq> Default for RunCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect every run of `values` in order
pub fn runs<T: PartialEq>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counter = RunCounter::new();
    let mut out: Vec<(T, usize)> = values.into_iter().filter_map(|v| counter.push(v)).collect();
    out.extend(counter.finish());
    out
}
