//! Error types for every stage of the citation pipeline.
//!
//! Each stage owns a small `thiserror` enum; [`CoreError`] wraps them all so the
//! facade functions can use `?` freely. [`CoreError::kind`] collapses any failure
//! into one of the kinds callers are expected to branch on.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::BookId;

/// Crate-wide result type alias
pub type Result<T> = std::result::Result<T, CoreError>;

/// Coarse classification of a failure, for callers that only need to pick a
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The citation text matched no grammar rule.
    BadFormat,
    /// The book token resolved to no known book.
    UnknownBook,
    /// A chapter lies outside the book's chapter count.
    ChapterOutOfRange,
    /// A verse lies beyond what the provider reports for the chapter.
    VerseOutOfRange,
    /// The scripture text source failed.
    ProviderError,
    /// Registry construction or configuration failed; not tied to a request.
    Setup,
}

/// A book token that no alias table could resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown book '{token}'{}", self.hint())]
pub struct UnknownBook {
    /// The token as it appeared in the citation.
    pub token: String,
    /// Closest known alias, if any scored well enough.
    pub suggestion: Option<String>,
}

impl UnknownBook {
    /// `" (did you mean '...'?)"`, or empty without a suggestion.
    pub fn hint(&self) -> String {
        self.suggestion
            .as_ref()
            .map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
    }
}

/// Citation text could not be turned into a structured reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No grammar rule matched.
    #[error("bad citation format in '{input}': {reason}")]
    BadFormat {
        /// The offending text (a whole citation or one part of it).
        input: String,
        /// What the parser expected.
        reason: &'static str,
    },

    /// The book token is not a known alias.
    #[error(transparent)]
    UnknownBook(#[from] UnknownBook),

    /// A `;`-separated part named a different book than the first part.
    #[error("citation mixes books: started with {expected}, later part names {found}")]
    MixedBooks {
        /// Book of the first part.
        expected: BookId,
        /// Book named by the later part.
        found: BookId,
    },
}

impl ParseError {
    /// Shorthand for a [`ParseError::BadFormat`].
    pub fn bad_format(input: impl Into<String>, reason: &'static str) -> Self {
        Self::BadFormat { input: input.into(), reason }
    }
}

/// A parsed segment violates its own shape or exceeds the book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Chapter range runs backwards.
    #[error("chapter range {start}-{end} runs backwards")]
    InvertedChapters {
        /// First chapter.
        start: u32,
        /// Last chapter.
        end: u32,
    },

    /// Verse range runs backwards within one chapter.
    #[error("verse range {start}-{end} in chapter {chapter} runs backwards")]
    InvertedVerses {
        /// Chapter the verses belong to.
        chapter: u32,
        /// First verse.
        start: u32,
        /// Last verse.
        end: u32,
    },

    /// Verses are numbered from 1.
    #[error("verse 0 in chapter {chapter}")]
    ZeroVerse {
        /// Chapter holding the zero verse.
        chapter: u32,
    },

    /// A multi-chapter range ends past the last chapter of the book.
    #[error("range in book {book_id} ends at chapter {chapter_end}, book has {max}")]
    TooWide {
        /// Book being expanded.
        book_id: BookId,
        /// Requested last chapter.
        chapter_end: u32,
        /// Chapters in the book.
        max: u32,
    },
}

/// A resolved segment falls outside the book's canonical bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Chapter is zero or greater than the book's chapter count.
    #[error("chapter {chapter} is out of range for book {book_id} (1-{max})")]
    ChapterOutOfRange {
        /// Book of the segment.
        book_id: BookId,
        /// Offending chapter.
        chapter: u32,
        /// Chapters in the book.
        max: u32,
    },
}

/// Failure reported by a scripture text source.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source has no such chapter.
    #[error("chapter {chapter} of book {book_id} is not available")]
    MissingChapter {
        /// Requested book.
        book_id: BookId,
        /// Requested chapter.
        chapter: u32,
    },

    /// The chapter exists but none of the requested verses do.
    #[error("no verses {verse_start:?}-{verse_end:?} in book {book_id} chapter {chapter}")]
    MissingVerses {
        /// Requested book.
        book_id: BookId,
        /// Requested chapter.
        chapter: u32,
        /// First requested verse.
        verse_start: Option<u32>,
        /// Last requested verse.
        verse_end: Option<u32>,
    },

    /// The source cannot say how many verses a chapter has, so an open range
    /// cannot be closed.
    #[error("verse count unknown for book {book_id} chapter {chapter}")]
    MissingVerseCount {
        /// Requested book.
        book_id: BookId,
        /// Requested chapter.
        chapter: u32,
    },

    /// IO error reading a corpus file.
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File being read.
        path: PathBuf,
    },

    /// Corpus file is not the expected JSON shape.
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        /// The underlying JSON error.
        source: serde_json::Error,
        /// File being decoded.
        path: PathBuf,
    },

    /// Any other backend failure (network, timeout, ...).
    #[error("scripture source unavailable: {0}")]
    Unavailable(String),
}

/// Failure while stitching provider text together.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A requested verse exceeds the provider's count for that chapter.
    #[error("verse {verse} is out of range for book {book_id} chapter {chapter} (1-{max})")]
    VerseOutOfRange {
        /// Book of the segment.
        book_id: BookId,
        /// Chapter of the segment.
        chapter: u32,
        /// First offending verse.
        verse: u32,
        /// Verses the provider reports for the chapter.
        max: u32,
    },

    /// The provider failed; propagated verbatim.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Book table is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same alias names two different books.
    #[error("alias '{alias}' maps to both book {first} and book {second}")]
    DuplicateAlias {
        /// Normalized alias.
        alias: String,
        /// Book that claimed it first.
        first: u8,
        /// Book that claimed it again.
        second: u8,
    },

    /// Book ids must be dense and lie in 1..=66.
    #[error("book id {found} out of place (expected {expected})")]
    BadId {
        /// Id the table position requires.
        expected: u8,
        /// Id found in the table.
        found: u8,
    },

    /// Every book needs at least one chapter.
    #[error("book {0} has no chapters")]
    NoChapters(u8),
}

/// Configuration error with guidance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Configuration error: {message}. {hint}")]
pub struct ConfigError {
    /// Description of the configuration problem.
    pub message: String,
    /// Actionable guidance for fixing the issue.
    pub hint: &'static str,
}

impl ConfigError {
    /// Create a config error with actionable hint
    pub fn new(message: impl Into<String>, hint: &'static str) -> Self {
        Self { message: message.into(), hint }
    }
}

/// Any failure the crate can report.
#[derive(Debug, Error)]
pub enum CoreError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),

    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// See [`AssemblyError`].
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// See [`ProviderError`].
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// See [`RegistryError`].
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<UnknownBook> for CoreError {
    fn from(e: UnknownBook) -> Self {
        Self::Parse(ParseError::UnknownBook(e))
    }
}

impl CoreError {
    /// Classify this error into the kind a caller should report.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnknownBook(_)) => ErrorKind::UnknownBook,
            Self::Parse(_)
            | Self::Range(
                RangeError::InvertedChapters { .. }
                | RangeError::InvertedVerses { .. }
                | RangeError::ZeroVerse { .. },
            ) => ErrorKind::BadFormat,
            Self::Range(RangeError::TooWide { .. }) | Self::Validation(_) => {
                ErrorKind::ChapterOutOfRange
            }
            Self::Assembly(AssemblyError::VerseOutOfRange { .. }) => ErrorKind::VerseOutOfRange,
            Self::Assembly(AssemblyError::Provider(_)) | Self::Provider(_) => {
                ErrorKind::ProviderError
            }
            Self::Registry(_) | Self::Config(_) => ErrorKind::Setup,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn unknown_book_mentions_suggestion() {
        let err = UnknownBook { token: "Бтт".into(), suggestion: Some("Быт".into()) };
        let msg = err.to_string();
        assert!(msg.contains("Бтт"));
        assert!(msg.contains("did you mean 'Быт'"));

        let bare = UnknownBook { token: "Зюзю".into(), suggestion: None };
        assert_eq!(bare.to_string(), "unknown book 'Зюзю'");
        assert!(bare.hint().is_empty());

        let source: &dyn std::error::Error = &bare;
        assert!(source.source().is_none());
    }

    #[test]
    fn kinds_cover_every_stage() {
        let book = BookId::new(47).unwrap();

        let unknown: CoreError = UnknownBook { token: "x".into(), suggestion: None }.into();
        assert_eq!(unknown.kind(), ErrorKind::UnknownBook);

        let mixed: CoreError = ParseError::MixedBooks { expected: book, found: book }.into();
        assert_eq!(mixed.kind(), ErrorKind::BadFormat);

        let zero: CoreError = RangeError::ZeroVerse { chapter: 1 }.into();
        assert_eq!(zero.kind(), ErrorKind::BadFormat);

        let wide: CoreError = RangeError::TooWide { book_id: book, chapter_end: 9, max: 3 }.into();
        assert_eq!(wide.kind(), ErrorKind::ChapterOutOfRange);

        let verse: CoreError =
            AssemblyError::VerseOutOfRange { book_id: book, chapter: 1, verse: 40, max: 21 }.into();
        assert_eq!(verse.kind(), ErrorKind::VerseOutOfRange);

        let provider: CoreError =
            AssemblyError::from(ProviderError::Unavailable("timeout".into())).into();
        assert_eq!(provider.kind(), ErrorKind::ProviderError);

        let config: CoreError = ConfigError::new("bad", "fix it").into();
        assert_eq!(config.kind(), ErrorKind::Setup);
    }
}
