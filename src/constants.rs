//! Application constants.
//!
//! Centralizes canon sizes, separators and lookup thresholds.

/// Canon layout constants.
pub mod books {
    /// Number of books in the corpus.
    pub const BOOK_COUNT: u8 = 66;

    /// Last Old Testament book id; everything after is New Testament.
    pub const LAST_OLD_TESTAMENT_BOOK: u8 = 39;
}

/// Alias lookup constants.
pub mod lookup {
    /// Shortest normalized input the substring fallback will consider.
    ///
    /// Two-letter tokens like "ин" are substrings of half the canon.
    pub const MIN_FALLBACK_LEN: usize = 3;

    /// Minimum fuzzy score before an alias is offered as a suggestion.
    pub const MIN_SUGGESTION_SCORE: i64 = 30;
}

/// Text assembly constants.
pub mod assembly {
    /// Placed between texts of distinct top-level citation segments.
    pub const DEFAULT_SEGMENT_SEPARATOR: &str = "\n\n";

    /// Placed between pieces of one segment (head and tail of a cross-chapter
    /// range, chapters of a chapter range).
    pub const DEFAULT_PASSAGE_JOINER: &str = " ";

    /// Superscript digits used when a provider numbers its verses.
    pub const SUPERSCRIPT_DIGITS: &[char] = &['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
}

/// Configuration defaults.
pub mod config {
    /// Translation loaded when none is configured.
    pub const DEFAULT_TRANSLATION: &str = "rst";

    /// Directory under the platform data dir holding translation files.
    pub const DATA_DIR_NAME: &str = "lectio";
}
