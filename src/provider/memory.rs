//! In-memory provider, also the storage behind the JSON provider.

use std::collections::BTreeMap;

use super::{render_verses, ScriptureProvider, VerseNumbers};
use crate::error::ProviderError;
use crate::types::BookId;

/// Verses held in memory, keyed by book and chapter.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    chapters: BTreeMap<(BookId, u32), BTreeMap<u32, String>>,
    numbers: VerseNumbers,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how verse numbers appear in returned text.
    #[must_use]
    pub const fn with_verse_numbers(mut self, numbers: VerseNumbers) -> Self {
        self.numbers = numbers;
        self
    }

    /// Add a chapter whose verses are numbered from 1 in order.
    #[must_use]
    pub fn with_chapter<S: Into<String>>(
        mut self,
        book_id: BookId,
        chapter: u32,
        verses: impl IntoIterator<Item = S>,
    ) -> Self {
        self.insert_chapter(book_id, chapter, (1..).zip(verses.into_iter().map(Into::into)));
        self
    }

    /// Insert (or replace) a chapter from explicit verse numbers.
    pub fn insert_chapter(
        &mut self,
        book_id: BookId,
        chapter: u32,
        verses: impl IntoIterator<Item = (u32, String)>,
    ) {
        self.chapters.insert((book_id, chapter), verses.into_iter().collect());
    }

    /// Whether a chapter is loaded.
    pub fn contains_chapter(&self, book_id: BookId, chapter: u32) -> bool {
        self.chapters.contains_key(&(book_id, chapter))
    }

    /// Number of chapters loaded.
    pub fn chapter_total(&self) -> usize {
        self.chapters.len()
    }
}

impl ScriptureProvider for MemoryProvider {
    fn get_text(
        &self,
        book_id: BookId,
        chapter: u32,
        verse_start: Option<u32>,
        verse_end: Option<u32>,
    ) -> Result<String, ProviderError> {
        let verses = self
            .chapters
            .get(&(book_id, chapter))
            .ok_or(ProviderError::MissingChapter { book_id, chapter })?;

        let start = verse_start.unwrap_or(1);
        let end = verse_end.unwrap_or(u32::MAX);
        if start > end {
            return Err(ProviderError::MissingVerses { book_id, chapter, verse_start, verse_end });
        }
        let mut selected = verses.range(start..=end).peekable();
        if selected.peek().is_none() {
            return Err(ProviderError::MissingVerses { book_id, chapter, verse_start, verse_end });
        }

        Ok(render_verses(selected.map(|(n, t)| (*n, t.as_str())), self.numbers))
    }

    fn chapter_verse_count(&self, book_id: BookId, chapter: u32) -> Option<u32> {
        self.chapters
            .get(&(book_id, chapter))
            .and_then(|verses| verses.keys().next_back().copied())
    }
}
