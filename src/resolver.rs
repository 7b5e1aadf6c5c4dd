//! Range resolver: expands parsed segments into concrete fetch segments.
//!
//! Resolution is pure. A cross-chapter range needs the last verse of its
//! first chapter, which only the text provider knows, so the head of such a
//! range is left open-ended (`verse_end = None`) until [`close_ranges`] asks
//! the provider for the exact count. There is no estimated fallback.

use serde::{Deserialize, Serialize};

use crate::error::{AssemblyError, CoreError, ProviderError, RangeError};
use crate::parser::{ParsedCitation, Segment};
use crate::provider::ScriptureProvider;
use crate::registry::BookRegistry;
use crate::types::BookId;

/// One unit of text to request from a provider.
///
/// Both bounds `None` means the whole chapter; `verse_start` set with
/// `verse_end` unset means from `verse_start` to the end of the chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchSegment {
    /// Book to read from.
    pub book_id: BookId,
    /// Chapter to read from.
    pub chapter: u32,
    /// First verse, inclusive.
    pub verse_start: Option<u32>,
    /// Last verse, inclusive.
    pub verse_end: Option<u32>,
    /// Index of the top-level citation segment this came from.
    pub group: usize,
}

impl FetchSegment {
    /// A whole chapter.
    pub const fn whole_chapter(book_id: BookId, chapter: u32, group: usize) -> Self {
        Self { book_id, chapter, verse_start: None, verse_end: None, group }
    }

    /// An inclusive verse range within one chapter.
    pub const fn verses(book_id: BookId, chapter: u32, start: u32, end: u32, group: usize) -> Self {
        Self { book_id, chapter, verse_start: Some(start), verse_end: Some(end), group }
    }

    /// From `start` to the end of the chapter.
    pub const fn open_ended(book_id: BookId, chapter: u32, start: u32, group: usize) -> Self {
        Self { book_id, chapter, verse_start: Some(start), verse_end: None, group }
    }

    /// Whether no verse bounds are set.
    pub const fn is_whole_chapter(&self) -> bool {
        self.verse_start.is_none() && self.verse_end.is_none()
    }

    /// Whether the segment runs to an end of chapter not yet known.
    pub const fn is_open_ended(&self) -> bool {
        self.verse_start.is_some() && self.verse_end.is_none()
    }
}

/// Expand a parsed citation into ordered fetch segments.
///
/// Within one citation segment the output ascends by chapter, then verse.
/// Across segments it follows citation order, so `Мф 2; 1` yields chapter 2
/// before chapter 1.
pub fn resolve(
    citation: &ParsedCitation,
    registry: &BookRegistry,
) -> Result<Vec<FetchSegment>, RangeError> {
    let book = citation.book_id;
    let max = registry.chapter_count(book);
    let mut out = Vec::with_capacity(citation.segments.len());

    for (group, segment) in citation.segments.iter().enumerate() {
        match *segment {
            Segment::WholeChapter { chapter } => {
                out.push(FetchSegment::whole_chapter(book, chapter, group));
            }
            Segment::ChapterRange { chapter_start, chapter_end } => {
                check_chapters(chapter_start, chapter_end)?;
                check_width(book, chapter_end, max)?;
                out.extend(
                    (chapter_start..=chapter_end)
                        .map(|chapter| FetchSegment::whole_chapter(book, chapter, group)),
                );
            }
            Segment::SingleVerse { chapter, verse } => {
                check_verses(chapter, verse, verse)?;
                out.push(FetchSegment::verses(book, chapter, verse, verse, group));
            }
            Segment::VerseRange { chapter, verse_start, verse_end } => {
                check_verses(chapter, verse_start, verse_end)?;
                out.push(FetchSegment::verses(book, chapter, verse_start, verse_end, group));
            }
            Segment::CrossChapterRange { chapter_start, verse_start, chapter_end, verse_end } => {
                if chapter_start >= chapter_end {
                    return Err(RangeError::InvertedChapters { start: chapter_start, end: chapter_end });
                }
                if verse_start == 0 {
                    return Err(RangeError::ZeroVerse { chapter: chapter_start });
                }
                if verse_end == 0 {
                    return Err(RangeError::ZeroVerse { chapter: chapter_end });
                }
                check_width(book, chapter_end, max)?;

                out.push(FetchSegment::open_ended(book, chapter_start, verse_start, group));
                out.extend(
                    (chapter_start + 1..chapter_end)
                        .map(|chapter| FetchSegment::whole_chapter(book, chapter, group)),
                );
                out.push(FetchSegment::verses(book, chapter_end, 1, verse_end, group));
            }
        }
    }

    tracing::debug!("Resolved {} segment(s) into {} fetch segment(s)", citation.segments.len(), out.len());
    Ok(out)
}

/// Replace every open end with the provider's exact verse count.
///
/// An open head starting past the chapter's last verse is out of range.
pub fn close_ranges(
    segments: &mut [FetchSegment],
    provider: &dyn ScriptureProvider,
) -> Result<(), AssemblyError> {
    for segment in segments.iter_mut().filter(|s| s.is_open_ended()) {
        let count = provider
            .chapter_verse_count(segment.book_id, segment.chapter)
            .ok_or(ProviderError::MissingVerseCount {
                book_id: segment.book_id,
                chapter: segment.chapter,
            })?;
        if let Some(start) = segment.verse_start.filter(|&start| start > count) {
            return Err(AssemblyError::VerseOutOfRange {
                book_id: segment.book_id,
                chapter: segment.chapter,
                verse: start,
                max: count,
            });
        }
        segment.verse_end = Some(count);
    }
    Ok(())
}

/// Resolve and close in one step, yielding fully bounded segments.
pub fn resolve_exact(
    citation: &ParsedCitation,
    registry: &BookRegistry,
    provider: &dyn ScriptureProvider,
) -> Result<Vec<FetchSegment>, CoreError> {
    let mut segments = resolve(citation, registry)?;
    close_ranges(&mut segments, provider)?;
    Ok(segments)
}

const fn check_chapters(start: u32, end: u32) -> Result<(), RangeError> {
    if start > end {
        return Err(RangeError::InvertedChapters { start, end });
    }
    Ok(())
}

const fn check_verses(chapter: u32, start: u32, end: u32) -> Result<(), RangeError> {
    if start == 0 || end == 0 {
        return Err(RangeError::ZeroVerse { chapter });
    }
    if start > end {
        return Err(RangeError::InvertedVerses { chapter, start, end });
    }
    Ok(())
}

/// Multi-chapter ranges are expanded eagerly; refuse to expand past the book.
const fn check_width(book_id: BookId, chapter_end: u32, max: u32) -> Result<(), RangeError> {
    if chapter_end > max {
        return Err(RangeError::TooWide { book_id, chapter_end, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::parser::parse;
    use crate::provider::MemoryProvider;

    fn book(n: u8) -> BookId {
        BookId::new(n).unwrap()
    }

    fn resolve_str(raw: &str) -> Vec<FetchSegment> {
        resolve(&parse(raw).unwrap(), BookRegistry::global()).unwrap()
    }

    #[test]
    fn chapter_range_expands_per_chapter() {
        let segments = resolve_str("Быт 1-3");
        assert_eq!(
            segments,
            vec![
                FetchSegment::whole_chapter(book(1), 1, 0),
                FetchSegment::whole_chapter(book(1), 2, 0),
                FetchSegment::whole_chapter(book(1), 3, 0),
            ]
        );
    }

    #[test]
    fn cross_chapter_splits_head_and_tail() {
        let segments = resolve_str("Быт 1:1-2:25");
        assert_eq!(
            segments,
            vec![
                FetchSegment::open_ended(book(1), 1, 1, 0),
                FetchSegment::verses(book(1), 2, 1, 25, 0),
            ]
        );
    }

    #[test]
    fn cross_chapter_fills_middle_chapters() {
        let segments = resolve_str("Ин 1:40-4:2");
        let chapters: Vec<u32> = segments.iter().map(|s| s.chapter).collect();
        assert_eq!(chapters, vec![1, 2, 3, 4]);
        assert!(segments[0].is_open_ended());
        assert!(segments[1].is_whole_chapter());
        assert!(segments[2].is_whole_chapter());
        assert_eq!(segments[3], FetchSegment::verses(book(43), 4, 1, 2, 0));
    }

    #[test]
    fn simple_forms_map_directly() {
        assert_eq!(resolve_str("Ин 3"), vec![FetchSegment::whole_chapter(book(43), 3, 0)]);
        assert_eq!(resolve_str("Ин 3:16"), vec![FetchSegment::verses(book(43), 3, 16, 16, 0)]);
        assert_eq!(resolve_str("Ин 3:16-18"), vec![FetchSegment::verses(book(43), 3, 16, 18, 0)]);
    }

    #[test]
    fn groups_follow_citation_segments() {
        let segments = resolve_str("Мф 18:18-22; 19:1-2, 13-15");
        let groups: Vec<usize> = segments.iter().map(|s| s.group).collect();
        assert_eq!(groups, vec![0, 1, 2]);

        let segments = resolve_str("Ин 15:26, 27-16:4");
        let groups: Vec<usize> = segments.iter().map(|s| s.group).collect();
        assert_eq!(groups, vec![0, 1, 1]);
    }

    #[test]
    fn output_keeps_citation_order() {
        let segments = resolve_str("Мф 2; 1");
        let chapters: Vec<u32> = segments.iter().map(|s| s.chapter).collect();
        assert_eq!(chapters, vec![2, 1]);
    }

    #[test]
    fn range_past_book_end_is_refused() {
        let citation = parse("2Пет 2-9").unwrap();
        assert_eq!(
            resolve(&citation, BookRegistry::global()).unwrap_err(),
            RangeError::TooWide { book_id: book(47), chapter_end: 9, max: 3 }
        );
    }

    #[test]
    fn hand_built_segments_are_checked() {
        let registry = BookRegistry::global();
        let inverted = ParsedCitation {
            book_id: book(1),
            segments: vec![Segment::VerseRange { chapter: 1, verse_start: 5, verse_end: 2 }],
        };
        assert_eq!(
            resolve(&inverted, registry).unwrap_err(),
            RangeError::InvertedVerses { chapter: 1, start: 5, end: 2 }
        );

        let zero = ParsedCitation {
            book_id: book(1),
            segments: vec![Segment::SingleVerse { chapter: 4, verse: 0 }],
        };
        assert_eq!(resolve(&zero, registry).unwrap_err(), RangeError::ZeroVerse { chapter: 4 });

        let backwards = ParsedCitation {
            book_id: book(1),
            segments: vec![Segment::CrossChapterRange {
                chapter_start: 3,
                verse_start: 1,
                chapter_end: 2,
                verse_end: 1,
            }],
        };
        assert_eq!(
            resolve(&backwards, registry).unwrap_err(),
            RangeError::InvertedChapters { start: 3, end: 2 }
        );
    }

    #[test]
    fn close_ranges_uses_exact_count() {
        let provider = MemoryProvider::new()
            .with_chapter(book(1), 1, (1..=31).map(|v| format!("v{v}")))
            .with_chapter(book(1), 2, (1..=25).map(|v| format!("v{v}")));
        let segments =
            resolve_exact(&parse("Быт 1:1-2:25").unwrap(), BookRegistry::global(), &provider).unwrap();
        assert_eq!(
            segments,
            vec![
                FetchSegment::verses(book(1), 1, 1, 31, 0),
                FetchSegment::verses(book(1), 2, 1, 25, 0),
            ]
        );
    }

    #[test]
    fn close_ranges_without_count_fails() {
        let provider = MemoryProvider::new();
        let mut segments = resolve_str("Быт 1:1-2:25");
        let err = close_ranges(&mut segments, &provider).unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::Provider(ProviderError::MissingVerseCount { chapter: 1, .. })
        ));
    }

    #[test]
    fn open_head_past_chapter_end_is_out_of_range() {
        let provider = MemoryProvider::new()
            .with_chapter(book(1), 1, (1..=31).map(|v| format!("v{v}")))
            .with_chapter(book(1), 2, (1..=25).map(|v| format!("v{v}")));
        let err = resolve_exact(&parse("Быт 1:40-2:3").unwrap(), BookRegistry::global(), &provider)
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::VerseOutOfRange);
        assert!(matches!(
            err,
            CoreError::Assembly(AssemblyError::VerseOutOfRange { chapter: 1, verse: 40, max: 31, .. })
        ));
    }
}
