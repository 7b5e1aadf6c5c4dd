//! Core type definitions for compile-time safety.
//!
//! Book identifiers are a newtype so a chapter or verse number can never be
//! passed where a book is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::books::{BOOK_COUNT, LAST_OLD_TESTAMENT_BOOK};

/// Canonical book identifier, dense over `1..=66`.
///
/// Old Testament books are `1..=39`, New Testament books `40..=66`, following
/// the Synodal ordering (Acts, then the General Epistles, then Paul).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BookId(u8);

impl BookId {
    /// Create a book id, rejecting anything outside `1..=66`.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id <= BOOK_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in the book table.
    pub(crate) const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The testament this book belongs to.
    #[must_use]
    pub const fn testament(self) -> Testament {
        Testament::of(self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for BookId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| format!("book id {id} outside 1-{BOOK_COUNT}"))
    }
}

impl From<BookId> for u8 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    /// Books 1-39.
    OldTestament,
    /// Books 40-66.
    NewTestament,
}

impl Testament {
    /// Testament of the given book.
    #[must_use]
    pub const fn of(book: BookId) -> Self {
        if book.get() <= LAST_OLD_TESTAMENT_BOOK {
            Self::OldTestament
        } else {
            Self::NewTestament
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OldTestament => "Ветхий завет",
            Self::NewTestament => "Новый завет",
        }
    }
}
