//! Provider backed by a translation JSON file.
//!
//! Files are shaped `{ "<book name>": { "<chapter>": { "<verse>": "text" } } }`.
//! Book names are resolved through the registry, so any accepted alias works
//! as a key ("Матфей", "Мф", "Matt").

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::{MemoryProvider, ScriptureProvider, VerseNumbers};
use crate::config::Config;
use crate::error::{CoreError, ProviderError};
use crate::registry::BookRegistry;
use crate::types::BookId;

/// Bible data structure: Book -> Chapter -> Verse -> Text
///
/// Books are ordered by key so that duplicate keys for one book resolve the
/// same way on every load.
type BibleData = BTreeMap<String, HashMap<String, HashMap<String, String>>>;

/// A whole translation loaded into memory from one JSON file.
#[derive(Debug, Clone)]
pub struct JsonBibleProvider {
    path: PathBuf,
    verses: MemoryProvider,
}

impl JsonBibleProvider {
    /// Load a translation file, resolving book keys against `registry`.
    pub fn open(path: impl Into<PathBuf>, registry: &BookRegistry) -> Result<Self, ProviderError> {
        let path = path.into();
        let content = fs_err::read_to_string(&path)
            .map_err(|source| ProviderError::Io { source, path: path.clone() })?;
        let data: BibleData = serde_json::from_str(&content)
            .map_err(|source| ProviderError::Decode { source, path: path.clone() })?;

        let verses = index(data, registry, &path);
        tracing::info!("Loaded {} chapters from {}", verses.chapter_total(), path.display());

        Ok(Self { path, verses })
    }

    /// Load the configured translation with the configured verse numbering.
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let provider = Self::open(config.translation_path(), BookRegistry::global())?;
        Ok(provider.with_verse_numbers(config.verse_numbers))
    }

    /// Set how verse numbers appear in returned text.
    #[must_use]
    pub fn with_verse_numbers(mut self, numbers: VerseNumbers) -> Self {
        self.verses = self.verses.with_verse_numbers(numbers);
        self
    }

    /// File this translation was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn index(data: BibleData, registry: &BookRegistry, path: &Path) -> MemoryProvider {
    let mut verses = MemoryProvider::new();

    for (book_name, chapters) in data {
        let Some((book_id, _)) = registry.lookup(&book_name) else {
            tracing::warn!("Skipping unknown book '{book_name}' in {}", path.display());
            continue;
        };

        for (chapter_key, chapter_verses) in chapters {
            // Non-numeric keys ("info") carry metadata, not chapters
            let Ok(chapter) = chapter_key.trim().parse::<u32>() else {
                continue;
            };
            if verses.contains_chapter(book_id, chapter) {
                tracing::warn!(
                    "Ignoring '{book_name}' chapter {chapter} in {}: book {book_id} chapter {chapter} already loaded",
                    path.display()
                );
                continue;
            }
            let numbered = chapter_verses
                .into_iter()
                .filter_map(|(verse, text)| verse.trim().parse::<u32>().ok().map(|n| (n, text)));
            verses.insert_chapter(book_id, chapter, numbered);
        }
    }

    verses
}

impl ScriptureProvider for JsonBibleProvider {
    fn get_text(
        &self,
        book_id: BookId,
        chapter: u32,
        verse_start: Option<u32>,
        verse_end: Option<u32>,
    ) -> Result<String, ProviderError> {
        self.verses.get_text(book_id, chapter, verse_start, verse_end)
    }

    fn chapter_verse_count(&self, book_id: BookId, chapter: u32) -> Option<u32> {
        self.verses.chapter_verse_count(book_id, chapter)
    }
}
