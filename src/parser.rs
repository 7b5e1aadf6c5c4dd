//! Citation parser: raw citation text to a structured [`ParsedCitation`].
//!
//! Grammar, per `;`-separated part:
//!
//! ```text
//! part     := [book] item ("," item)*
//! item     := chapter ["-" chapter]                      (chapter level)
//!           | [chapter ":"] verse ["-" [chapter ":"] verse] (verse level)
//! ```
//!
//! The first item of a part is read at chapter level, so `1-3` is a chapter
//! range and `1:1-2:25` a cross-chapter range. Later items inherit the chapter
//! of the item before them: after `19:1-2`, a bare `13-15` means verses of
//! chapter 19. Only the first part must name a book; the rest reuse it.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::registry::BookRegistry;
use crate::types::BookId;

/// Parenthesised notes such as `(зач. 76)`.
#[allow(clippy::expect_used)]
static RE_NOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\([^)]*\)").expect("valid regex: RE_NOTES")
});

/// A book token followed by a locator: `Быт 1:1`, `1 Цар. 2`, `Песнь Песней 3`.
#[allow(clippy::expect_used)]
static RE_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<book>\d?\s*\p{L}[\p{L}\d\s]*?)(?:\.\s*|\s+)(?P<locator>\d[\d\s:,\-]*)$")
        .expect("valid regex: RE_PART")
});

/// One comma-separated item: `3`, `1-3`, `3:16`, `16-18`, `1:1-2:25`, `27-16:4`.
#[allow(clippy::expect_used)]
static RE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<c1>\d+)\s*:\s*)?(?P<v1>\d+)(?:\s*-\s*(?:(?P<c2>\d+)\s*:\s*)?(?P<v2>\d+))?$",
    )
    .expect("valid regex: RE_ITEM")
});

/// One grammatical unit of a citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// `Ин 3`
    WholeChapter {
        /// Chapter number.
        chapter: u32,
    },
    /// `Быт 1-3`
    ChapterRange {
        /// First chapter.
        chapter_start: u32,
        /// Last chapter, inclusive.
        chapter_end: u32,
    },
    /// `Ин 3:16`
    SingleVerse {
        /// Chapter number.
        chapter: u32,
        /// Verse number.
        verse: u32,
    },
    /// `Ин 3:16-18`
    VerseRange {
        /// Chapter number.
        chapter: u32,
        /// First verse.
        verse_start: u32,
        /// Last verse, inclusive.
        verse_end: u32,
    },
    /// `Быт 1:1-2:25`
    CrossChapterRange {
        /// Chapter of the first verse.
        chapter_start: u32,
        /// First verse.
        verse_start: u32,
        /// Chapter of the last verse.
        chapter_end: u32,
        /// Last verse, inclusive.
        verse_end: u32,
    },
}

impl Segment {
    /// Chapter the segment finishes in.
    pub const fn last_chapter(&self) -> u32 {
        match *self {
            Self::WholeChapter { chapter }
            | Self::SingleVerse { chapter, .. }
            | Self::VerseRange { chapter, .. } => chapter,
            Self::ChapterRange { chapter_end, .. } | Self::CrossChapterRange { chapter_end, .. } => {
                chapter_end
            }
        }
    }

    /// Whether the segment addresses whole chapters rather than verses.
    pub const fn is_chapter_level(&self) -> bool {
        matches!(self, Self::WholeChapter { .. } | Self::ChapterRange { .. })
    }
}

/// Locator form, without the book: `3`, `1-3`, `3:16`, `3:16-18`, `1:1-2:25`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WholeChapter { chapter } => write!(f, "{chapter}"),
            Self::ChapterRange { chapter_start, chapter_end } => {
                write!(f, "{chapter_start}-{chapter_end}")
            }
            Self::SingleVerse { chapter, verse } => write!(f, "{chapter}:{verse}"),
            Self::VerseRange { chapter, verse_start, verse_end } => {
                write!(f, "{chapter}:{verse_start}-{verse_end}")
            }
            Self::CrossChapterRange { chapter_start, verse_start, chapter_end, verse_end } => {
                write!(f, "{chapter_start}:{verse_start}-{chapter_end}:{verse_end}")
            }
        }
    }
}

/// A citation resolved to one book and its ordered segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCitation {
    /// The single book every segment belongs to.
    pub book_id: BookId,
    /// Segments in citation order.
    pub segments: Vec<Segment>,
}

/// Parse a citation against the global registry.
pub fn parse(raw: &str) -> Result<ParsedCitation, ParseError> {
    parse_with(raw, BookRegistry::global())
}

/// Parse a citation against the given registry.
pub fn parse_with(raw: &str, registry: &BookRegistry) -> Result<ParsedCitation, ParseError> {
    let cleaned = clean(raw);
    let mut book_id: Option<BookId> = None;
    let mut segments = Vec::new();

    for part in cleaned.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (token, locator) = split_book(part);

        match (token, book_id) {
            (Some(token), None) => book_id = Some(registry.resolve_alias(token)?),
            (Some(token), Some(expected)) => {
                let found = registry.resolve_alias(token)?;
                if found != expected {
                    return Err(ParseError::MixedBooks { expected, found });
                }
            }
            (None, None) => {
                return Err(ParseError::bad_format(part, "citation must start with a book name"));
            }
            // Later parts may omit the book and continue the first part's book.
            (None, Some(_)) => {}
        }

        parse_locator(locator, &mut segments)?;
    }

    let book_id = book_id.ok_or_else(|| ParseError::bad_format(raw, "empty citation"))?;
    tracing::debug!("Parsed '{raw}' as book {book_id} with {} segment(s)", segments.len());

    Ok(ParsedCitation { book_id, segments })
}

/// Strip notes, unify dashes and trim.
fn clean(raw: &str) -> String {
    RE_NOTES
        .replace_all(raw, "")
        .replace(['–', '—', '‒', '−'], "-")
        .trim()
        .to_string()
}

/// Split a part into its book token (if it names one) and its locator.
fn split_book(part: &str) -> (Option<&str>, &str) {
    RE_PART.captures(part).map_or((None, part), |caps| {
        let book = caps.name("book").map_or("", |m| m.as_str());
        let locator = caps.name("locator").map_or("", |m| m.as_str());
        (Some(book), locator)
    })
}

/// Whether the next item is read at chapter level or as verses of a chapter.
#[derive(Debug, Clone, Copy)]
enum Context {
    Chapter,
    Verse(u32),
}

fn parse_locator(locator: &str, segments: &mut Vec<Segment>) -> Result<(), ParseError> {
    let mut context = Context::Chapter;

    for item in locator.split(',').map(str::trim) {
        if item.is_empty() {
            return Err(ParseError::bad_format(locator, "empty item in verse list"));
        }
        let segment = parse_item(item, context)?;
        context = if segment.is_chapter_level() {
            Context::Chapter
        } else {
            Context::Verse(segment.last_chapter())
        };
        segments.push(segment);
    }

    Ok(())
}

fn parse_item(item: &str, context: Context) -> Result<Segment, ParseError> {
    let caps = RE_ITEM
        .captures(item)
        .ok_or_else(|| ParseError::bad_format(item, "expected chapter, chapter:verse or a range"))?;
    let c1 = number(&caps, "c1", item)?;
    let c2 = number(&caps, "c2", item)?;
    let v2 = number(&caps, "v2", item)?;
    let v1 = number(&caps, "v1", item)?
        .ok_or_else(|| ParseError::bad_format(item, "missing number"))?;

    match (c1, c2, v2, context) {
        (None, None, None, Context::Chapter) => Ok(Segment::WholeChapter { chapter: v1 }),
        (None, None, Some(end), Context::Chapter) => chapter_range(item, v1, end),
        (None, None, None, Context::Verse(chapter)) => single_verse(item, chapter, v1),
        (None, None, Some(end), Context::Verse(chapter)) => verse_range(item, chapter, v1, end),
        (None, Some(end_chapter), Some(end), Context::Verse(chapter)) => {
            cross_chapter(item, chapter, v1, end_chapter, end)
        }
        (Some(chapter), None, None, _) => single_verse(item, chapter, v1),
        (Some(chapter), None, Some(end), _) => verse_range(item, chapter, v1, end),
        (Some(chapter), Some(end_chapter), Some(end), _) => {
            cross_chapter(item, chapter, v1, end_chapter, end)
        }
        _ => Err(ParseError::bad_format(item, "range end names a chapter but its start does not")),
    }
}

fn number(caps: &Captures<'_>, name: &str, item: &str) -> Result<Option<u32>, ParseError> {
    caps.name(name)
        .map(|m| m.as_str().parse::<u32>())
        .transpose()
        .map_err(|_| ParseError::bad_format(item, "number too large"))
}

fn chapter_range(item: &str, start: u32, end: u32) -> Result<Segment, ParseError> {
    match start.cmp(&end) {
        std::cmp::Ordering::Less => Ok(Segment::ChapterRange { chapter_start: start, chapter_end: end }),
        std::cmp::Ordering::Equal => Ok(Segment::WholeChapter { chapter: start }),
        std::cmp::Ordering::Greater => Err(ParseError::bad_format(item, "chapter range runs backwards")),
    }
}

fn single_verse(item: &str, chapter: u32, verse: u32) -> Result<Segment, ParseError> {
    if verse == 0 {
        return Err(ParseError::bad_format(item, "verses are numbered from 1"));
    }
    Ok(Segment::SingleVerse { chapter, verse })
}

fn verse_range(item: &str, chapter: u32, start: u32, end: u32) -> Result<Segment, ParseError> {
    if start == 0 || end == 0 {
        return Err(ParseError::bad_format(item, "verses are numbered from 1"));
    }
    match start.cmp(&end) {
        std::cmp::Ordering::Less => Ok(Segment::VerseRange { chapter, verse_start: start, verse_end: end }),
        std::cmp::Ordering::Equal => Ok(Segment::SingleVerse { chapter, verse: start }),
        std::cmp::Ordering::Greater => Err(ParseError::bad_format(item, "verse range runs backwards")),
    }
}

fn cross_chapter(
    item: &str,
    chapter_start: u32,
    verse_start: u32,
    chapter_end: u32,
    verse_end: u32,
) -> Result<Segment, ParseError> {
    if verse_start == 0 || verse_end == 0 {
        return Err(ParseError::bad_format(item, "verses are numbered from 1"));
    }
    match chapter_start.cmp(&chapter_end) {
        std::cmp::Ordering::Less => Ok(Segment::CrossChapterRange {
            chapter_start,
            verse_start,
            chapter_end,
            verse_end,
        }),
        std::cmp::Ordering::Equal => verse_range(item, chapter_start, verse_start, verse_end),
        std::cmp::Ordering::Greater => Err(ParseError::bad_format(item, "chapter range runs backwards")),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::UnknownBook;

    fn book(n: u8) -> BookId {
        BookId::new(n).unwrap()
    }

    #[test]
    fn test_parse_whole_chapter() {
        let c = parse("Ин 3").unwrap();
        assert_eq!(c.book_id, book(43));
        assert_eq!(c.segments, vec![Segment::WholeChapter { chapter: 3 }]);
    }

    #[test]
    fn test_parse_single_verse() {
        let c = parse("Ин 3:16").unwrap();
        assert_eq!(c.book_id, book(43));
        assert_eq!(c.segments, vec![Segment::SingleVerse { chapter: 3, verse: 16 }]);
    }

    #[test]
    fn test_parse_verse_range() {
        let c = parse("Ин 3:16-18").unwrap();
        assert_eq!(
            c.segments,
            vec![Segment::VerseRange { chapter: 3, verse_start: 16, verse_end: 18 }]
        );
    }

    #[test]
    fn test_parse_chapter_range() {
        let c = parse("Быт 1-3").unwrap();
        assert_eq!(c.book_id, book(1));
        assert_eq!(c.segments, vec![Segment::ChapterRange { chapter_start: 1, chapter_end: 3 }]);
    }

    #[test]
    fn test_parse_cross_chapter() {
        let c = parse("Быт 1:1-2:25").unwrap();
        assert_eq!(
            c.segments,
            vec![Segment::CrossChapterRange {
                chapter_start: 1,
                verse_start: 1,
                chapter_end: 2,
                verse_end: 25
            }]
        );
    }

    #[test]
    fn test_parse_multi_segment() {
        let c = parse("Мф 1; Мф 2").unwrap();
        assert_eq!(c.book_id, book(40));
        assert_eq!(
            c.segments,
            vec![Segment::WholeChapter { chapter: 1 }, Segment::WholeChapter { chapter: 2 }]
        );
    }

    #[test]
    fn test_book_carries_over_parts() {
        let c = parse("Мф 18:18-22; 19:1-2, 13-15").unwrap();
        assert_eq!(c.book_id, book(40));
        assert_eq!(
            c.segments,
            vec![
                Segment::VerseRange { chapter: 18, verse_start: 18, verse_end: 22 },
                Segment::VerseRange { chapter: 19, verse_start: 1, verse_end: 2 },
                Segment::VerseRange { chapter: 19, verse_start: 13, verse_end: 15 },
            ]
        );
    }

    #[test]
    fn test_comma_list_changes_chapter() {
        let c = parse("Мф 18:18-22, 19:1, 5").unwrap();
        assert_eq!(
            c.segments,
            vec![
                Segment::VerseRange { chapter: 18, verse_start: 18, verse_end: 22 },
                Segment::SingleVerse { chapter: 19, verse: 1 },
                Segment::SingleVerse { chapter: 19, verse: 5 },
            ]
        );
    }

    #[test]
    fn test_comma_list_crosses_chapter() {
        let c = parse("Ин 15:26, 27-16:4").unwrap();
        assert_eq!(
            c.segments,
            vec![
                Segment::SingleVerse { chapter: 15, verse: 26 },
                Segment::CrossChapterRange {
                    chapter_start: 15,
                    verse_start: 27,
                    chapter_end: 16,
                    verse_end: 4
                },
            ]
        );
    }

    #[test]
    fn test_comma_list_of_chapters() {
        let c = parse("Пс 1, 3-4").unwrap();
        assert_eq!(
            c.segments,
            vec![
                Segment::WholeChapter { chapter: 1 },
                Segment::ChapterRange { chapter_start: 3, chapter_end: 4 },
            ]
        );
    }

    #[test]
    fn test_later_part_restarts_at_chapter_level() {
        let c = parse("Мф 18:18; 19").unwrap();
        assert_eq!(c.segments[1], Segment::WholeChapter { chapter: 19 });
    }

    #[test]
    fn test_multi_word_and_numbered_books() {
        assert_eq!(parse("Песнь Песней 2:1").unwrap().book_id, book(22));
        assert_eq!(parse("1 Цар 2").unwrap().book_id, book(9));
        assert_eq!(parse("1Ин 4:8").unwrap().book_id, book(48));
        assert_eq!(parse("Первое послание Петра 1:3").unwrap().book_id, book(46));
        assert_eq!(parse("от иоанна 3:16").unwrap().book_id, book(43));
    }

    #[test]
    fn test_flexible_whitespace_and_period() {
        let expected = vec![Segment::VerseRange { chapter: 1, verse_start: 1, verse_end: 5 }];
        assert_eq!(parse("Быт.   1:1-5").unwrap().segments, expected);
        assert_eq!(parse("Быт. 1 : 1 - 5").unwrap().segments, expected);
        assert_eq!(parse("  Быт 1:1–5 ").unwrap().segments, expected);
    }

    #[test]
    fn test_notes_are_stripped() {
        let c = parse("Мф 5:1-12 (зач. 10)").unwrap();
        assert_eq!(
            c.segments,
            vec![Segment::VerseRange { chapter: 5, verse_start: 1, verse_end: 12 }]
        );
    }

    #[test]
    fn test_degenerate_ranges_collapse() {
        assert_eq!(parse("Ин 3:16-16").unwrap().segments, vec![Segment::SingleVerse { chapter: 3, verse: 16 }]);
        assert_eq!(parse("Быт 2-2").unwrap().segments, vec![Segment::WholeChapter { chapter: 2 }]);
        assert_eq!(
            parse("Быт 2:1-2:5").unwrap().segments,
            vec![Segment::VerseRange { chapter: 2, verse_start: 1, verse_end: 5 }]
        );
    }

    #[test]
    fn test_unknown_book() {
        let err = parse("Зюзю 1:1").unwrap_err();
        assert!(matches!(err, ParseError::UnknownBook(UnknownBook { ref token, .. }) if token == "Зюзю"));
    }

    #[test]
    fn test_mixed_books_rejected() {
        let err = parse("Мф 1; Мк 2").unwrap_err();
        assert_eq!(err, ParseError::MixedBooks { expected: book(40), found: book(41) });
    }

    #[test]
    fn test_bad_formats() {
        for raw in [
            "",
            "Быт",
            "3:16",
            "Быт 1:",
            "Быт 1:1a",
            "Быт 3-1",
            "Ин 3:18-16",
            "Быт 2:1-1:5",
            "Ин 3:0",
            "Ин 3:16,,18",
            "Ин 4-5:2",
            "Быт 99999999999",
        ] {
            assert!(
                matches!(parse(raw), Err(ParseError::BadFormat { .. })),
                "expected BadFormat for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        for raw in ["Ин 3:16", "Быт 1:1-2:25", "Мф 18:18-22; 19:1-2, 13-15", "Пс 1, 3-4"] {
            assert_eq!(parse(raw).unwrap(), parse(raw).unwrap());
        }
    }

    #[test]
    fn test_segment_display() {
        assert_eq!(Segment::WholeChapter { chapter: 3 }.to_string(), "3");
        assert_eq!(Segment::ChapterRange { chapter_start: 1, chapter_end: 3 }.to_string(), "1-3");
        assert_eq!(Segment::SingleVerse { chapter: 3, verse: 16 }.to_string(), "3:16");
        assert_eq!(
            Segment::CrossChapterRange { chapter_start: 1, verse_start: 1, chapter_end: 2, verse_end: 25 }
                .to_string(),
            "1:1-2:25"
        );
    }
}
