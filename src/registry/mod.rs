//! Book registry and alias normalization.
//!
//! Lookup runs three passes, strictly in order: the exact abbreviation table
//! (Russian and English), the exact full-name table, then a substring fallback
//! over full names. Short abbreviations like "Ин" and "1Ин" can only collide in
//! the last pass, which is why it runs last.

mod table;

use std::collections::{BTreeSet, HashMap};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use lazy_static::lazy_static;

use crate::constants::lookup::{MIN_FALLBACK_LEN, MIN_SUGGESTION_SCORE};
use crate::error::{RegistryError, UnknownBook};
use crate::types::{BookId, Testament};

pub use table::{BookEntry, BOOKS};

lazy_static! {
    /// Process-wide registry built from the static table.
    #[allow(clippy::expect_used)]
    static ref REGISTRY: BookRegistry =
        BookRegistry::from_entries(BOOKS).expect("static book table is consistent");
}

/// A book of the canon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Canonical id.
    pub id: BookId,
    /// Old or New Testament.
    pub testament: Testament,
    /// Display name.
    pub canonical_name: &'static str,
    /// Canonical Russian abbreviation ("Быт", "1Цар").
    pub abbreviation: &'static str,
    /// English abbreviation ("Gen", "1Kgs").
    pub english_abbreviation: &'static str,
    /// Every normalized alias that resolves to this book.
    pub aliases: BTreeSet<String>,
    /// Chapters in the book (always at least 1).
    pub chapter_count: u32,
}

/// Which lookup pass resolved an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMatch {
    /// Exact abbreviation table.
    Abbreviation,
    /// Exact full-name table.
    FullName,
    /// Substring fallback.
    Substring,
}

/// Immutable book table with alias indexes.
#[derive(Debug)]
pub struct BookRegistry {
    books: Vec<Book>,
    abbreviations: HashMap<String, BookId>,
    full_names: HashMap<String, BookId>,
    /// (spaced normalized full name, book) in table order, for the fallback.
    fallback: Vec<(String, BookId)>,
    /// Display spellings offered as suggestions.
    display_aliases: Vec<&'static str>,
}

impl BookRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Build a registry from table rows, failing on any inconsistency.
    pub fn from_entries(entries: &[BookEntry]) -> Result<Self, RegistryError> {
        let mut registry = Self {
            books: Vec::with_capacity(entries.len()),
            abbreviations: HashMap::new(),
            full_names: HashMap::new(),
            fallback: Vec::new(),
            display_aliases: Vec::new(),
        };
        // Every alias across both tables, so a clash between an abbreviation of
        // one book and a full name of another is caught too.
        let mut claimed: HashMap<String, BookId> = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            let expected = u8::try_from(position + 1).unwrap_or(u8::MAX);
            let id = BookId::new(entry.id)
                .filter(|id| id.get() == expected)
                .ok_or(RegistryError::BadId { expected, found: entry.id })?;
            if entry.chapters == 0 {
                return Err(RegistryError::NoChapters(entry.id));
            }

            let mut aliases = BTreeSet::new();
            for &abbr in entry.abbreviations.iter().chain(std::iter::once(&entry.english)) {
                let key = compact(abbr);
                claim(&mut claimed, &key, id)?;
                registry.abbreviations.insert(key.clone(), id);
                registry.display_aliases.push(abbr);
                aliases.insert(key);
            }
            for &full in entry.full_names {
                let key = compact(full);
                claim(&mut claimed, &key, id)?;
                registry.full_names.insert(key.clone(), id);
                registry.fallback.push((normalize(full), id));
                registry.display_aliases.push(full);
                aliases.insert(key);
            }

            registry.books.push(Book {
                id,
                testament: Testament::of(id),
                canonical_name: entry.name,
                abbreviation: entry.abbreviations.first().copied().unwrap_or(entry.name),
                english_abbreviation: entry.english,
                aliases,
                chapter_count: entry.chapters,
            });
        }

        Ok(registry)
    }

    /// Resolve a book token to its id.
    pub fn resolve_alias(&self, token: &str) -> Result<BookId, UnknownBook> {
        self.lookup(token).map(|(id, _)| id).ok_or_else(|| UnknownBook {
            token: token.trim().to_string(),
            suggestion: self.suggest(token),
        })
    }

    /// Resolve a book token, reporting which pass matched.
    pub fn lookup(&self, token: &str) -> Option<(BookId, AliasMatch)> {
        let key = compact(token);
        if key.is_empty() {
            return None;
        }

        if let Some(&id) = self.abbreviations.get(&key) {
            return Some((id, AliasMatch::Abbreviation));
        }
        if let Some(&id) = self.full_names.get(&key) {
            return Some((id, AliasMatch::FullName));
        }
        if key.chars().count() < MIN_FALLBACK_LEN {
            return None;
        }

        self.substring_match(&normalize(token)).map(|id| (id, AliasMatch::Substring))
    }

    /// Loose match: one string contains the other. Resolves only when every
    /// matching name belongs to the same book.
    fn substring_match(&self, needle: &str) -> Option<BookId> {
        let books: BTreeSet<BookId> = self
            .fallback
            .iter()
            .filter(|(name, _)| name.contains(needle) || needle.contains(name.as_str()))
            .map(|(_, id)| *id)
            .collect();

        match books.len() {
            0 => None,
            1 => {
                let id = books.first().copied()?;
                tracing::debug!("Book '{needle}' resolved to {id} by substring fallback");
                Some(id)
            }
            _ => {
                tracing::warn!("Book '{needle}' is ambiguous under substring fallback: {books:?}");
                None
            }
        }
    }

    /// Closest display alias by fuzzy score, for error messages.
    pub fn suggest(&self, token: &str) -> Option<String> {
        let pattern = normalize(token);
        if pattern.is_empty() {
            return None;
        }
        let matcher = SkimMatcherV2::default();
        self.display_aliases
            .iter()
            .filter_map(|alias| {
                matcher
                    .fuzzy_match(&alias.to_lowercase(), &pattern)
                    .map(|score| (score, *alias))
            })
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SCORE)
            .max_by_key(|(score, _)| *score)
            .map(|(_, alias)| alias.to_string())
    }

    /// Book for an id.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.index())
    }

    /// All books in canonical order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Chapters in the book; 0 only for a registry built from a partial table.
    pub fn chapter_count(&self, id: BookId) -> u32 {
        self.book(id).map_or(0, |b| b.chapter_count)
    }

    /// Testament of the book.
    pub fn testament(&self, id: BookId) -> Testament {
        self.book(id).map_or_else(|| Testament::of(id), |b| b.testament)
    }

    /// Canonical Russian abbreviation, used when rendering citations.
    pub fn abbreviation(&self, id: BookId) -> &'static str {
        self.book(id).map_or("?", |b| b.abbreviation)
    }

    /// English abbreviation.
    pub fn english_abbreviation(&self, id: BookId) -> &'static str {
        self.book(id).map_or("?", |b| b.english_abbreviation)
    }

    /// Display name.
    pub fn canonical_name(&self, id: BookId) -> &'static str {
        self.book(id).map_or("?", |b| b.canonical_name)
    }
}

fn claim(claimed: &mut HashMap<String, BookId>, key: &str, id: BookId) -> Result<(), RegistryError> {
    match claimed.get(key) {
        Some(&first) if first != id => Err(RegistryError::DuplicateAlias {
            alias: key.to_string(),
            first: first.get(),
            second: id.get(),
        }),
        Some(_) => Ok(()),
        None => {
            claimed.insert(key.to_string(), id);
            Ok(())
        }
    }
}

/// Lowercase, fold `ё`, drop a trailing period and collapse whitespace.
fn normalize(name: &str) -> String {
    name.trim()
        .trim_end_matches('.')
        .to_lowercase()
        .replace('ё', "е")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized form with all whitespace removed, so "1 Цар" finds "1Цар".
fn compact(name: &str) -> String {
    normalize(name).replace(' ', "")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn id(n: u8) -> BookId {
        BookId::new(n).unwrap()
    }

    #[test]
    fn table_is_complete() {
        let registry = BookRegistry::global();
        assert_eq!(registry.books().len(), 66);
        assert!(registry.books().iter().all(|b| b.chapter_count >= 1));
        assert_eq!(registry.chapter_count(id(19)), 150);
        assert_eq!(registry.chapter_count(id(47)), 3);
        assert_eq!(registry.testament(id(1)), Testament::OldTestament);
        assert_eq!(registry.testament(id(66)), Testament::NewTestament);
    }

    #[test]
    fn abbreviations_are_case_insensitive() {
        let registry = BookRegistry::global();
        assert_eq!(registry.resolve_alias("Ин").unwrap(), id(43));
        assert_eq!(registry.resolve_alias("ин").unwrap(), id(43));
        assert_eq!(registry.resolve_alias("ИН").unwrap(), id(43));
        assert_eq!(registry.resolve_alias("1Ин").unwrap(), id(48));
        assert_eq!(registry.resolve_alias("Быт").unwrap(), id(1));
        assert_eq!(registry.resolve_alias("1Цар").unwrap(), id(9));
        assert_eq!(registry.resolve_alias("Мф").unwrap(), id(40));
    }

    #[test]
    fn spacing_and_period_variants() {
        let registry = BookRegistry::global();
        assert_eq!(registry.resolve_alias("1 Цар").unwrap(), id(9));
        assert_eq!(registry.resolve_alias("1 цар.").unwrap(), id(9));
        assert_eq!(registry.resolve_alias("  Быт. ").unwrap(), id(1));
    }

    #[test]
    fn full_names_resolve_exactly() {
        let registry = BookRegistry::global();
        assert_eq!(registry.lookup("Бытие"), Some((id(1), AliasMatch::FullName)));
        assert_eq!(
            registry.lookup("Первое послание Петра"),
            Some((id(46), AliasMatch::FullName))
        );
        assert_eq!(registry.resolve_alias("Плач Иеремии").unwrap(), id(25));
        assert_eq!(registry.resolve_alias("Иеремии").unwrap(), id(24));
        assert_eq!(registry.resolve_alias("Апокалипсис").unwrap(), id(66));
    }

    #[test]
    fn english_abbreviations_map_to_same_ids() {
        let registry = BookRegistry::global();
        assert_eq!(registry.lookup("Gen"), Some((id(1), AliasMatch::Abbreviation)));
        assert_eq!(registry.resolve_alias("1Kgs").unwrap(), id(11));
        assert_eq!(registry.resolve_alias("john").unwrap(), id(43));
        assert_eq!(registry.resolve_alias("1John").unwrap(), id(48));
        assert_eq!(registry.english_abbreviation(id(12)), "2Kgs");
    }

    #[test]
    fn substring_fallback_is_last_resort() {
        let registry = BookRegistry::global();
        assert_eq!(registry.lookup("от иоанна"), Some((id(43), AliasMatch::Substring)));
        assert_eq!(registry.resolve_alias("от Матфея").unwrap(), id(40));
        // Two letters never reach the fallback.
        assert!(registry.lookup("ео").is_none());
    }

    #[test]
    fn ambiguous_fallback_resolves_nothing() {
        let registry = BookRegistry::global();
        // Matches 43's "иоанна" and the full names of 1, 2 and 3 Иоанна.
        assert!(registry.lookup("послание иоанна").is_none());
        // Contained in all four Gospel titles, whatever their lengths.
        assert!(registry.lookup("Евангелие").is_none());
        assert!(registry.resolve_alias("Евангелие").is_err());
    }

    #[test]
    fn unknown_book_carries_token() {
        let err = BookRegistry::global().resolve_alias("Зюзю").unwrap_err();
        assert_eq!(err.token, "Зюзю");
    }

    #[test]
    fn unknown_book_suggests_close_alias() {
        let err = BookRegistry::global().resolve_alias("Деяни апостолов").unwrap_err();
        let suggestion = err.suggestion.expect("a suggestion");
        assert!(suggestion.starts_with("Деяния"), "got {suggestion}");
    }

    #[test]
    fn duplicate_alias_fails_construction() {
        let entries = [
            BookEntry { id: 1, abbreviations: &["Быт"], english: "Gen", name: "Бытие", full_names: &["Бытие"], chapters: 50 },
            BookEntry { id: 2, abbreviations: &["быт"], english: "Exod", name: "Исход", full_names: &[], chapters: 40 },
        ];
        let err = BookRegistry::from_entries(&entries).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateAlias { alias: "быт".into(), first: 1, second: 2 }
        );
    }

    #[test]
    fn alias_shared_across_tables_fails_construction() {
        let entries = [
            BookEntry { id: 1, abbreviations: &["Иов"], english: "Job", name: "Иов", full_names: &[], chapters: 42 },
            BookEntry { id: 2, abbreviations: &["Исх"], english: "Exod", name: "Исход", full_names: &["Иов"], chapters: 40 },
        ];
        assert!(matches!(
            BookRegistry::from_entries(&entries),
            Err(RegistryError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn sparse_ids_and_empty_books_fail_construction() {
        let gap = [BookEntry { id: 2, abbreviations: &["Исх"], english: "Exod", name: "Исход", full_names: &[], chapters: 40 }];
        assert_eq!(
            BookRegistry::from_entries(&gap).unwrap_err(),
            RegistryError::BadId { expected: 1, found: 2 }
        );

        let empty = [BookEntry { id: 1, abbreviations: &["Быт"], english: "Gen", name: "Бытие", full_names: &[], chapters: 0 }];
        assert_eq!(BookRegistry::from_entries(&empty).unwrap_err(), RegistryError::NoChapters(1));
    }

    #[test]
    fn every_book_knows_its_aliases() {
        let registry = BookRegistry::global();
        let john = registry.book(id(43)).unwrap();
        assert!(john.aliases.contains("ин"));
        assert!(john.aliases.contains("john"));
        assert!(john.aliases.contains("евангелиеотиоанна"));
        assert_eq!(john.abbreviation, "Ин");
        assert_eq!(registry.canonical_name(id(47)), "Второе послание Петра");
    }
}
