//! Whitespace word counting.
//!
//! A word is a maximal run of non-whitespace characters. Counting is a pure
//! in-process scan of the text; nothing is spawned or read from outside.

/// Counts words in rendered message text.
pub struct WordCounter;

impl WordCounter {
    /// Count the words in `text`.
    ///
    /// An absent text counts as zero words. Callers that filter events must
    /// handle absent messages themselves rather than rely on this.
    pub fn count(text: Option<&str>) -> usize {
        text.map_or(0, count_words)
    }
}

/// Count maximal non-whitespace runs in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
