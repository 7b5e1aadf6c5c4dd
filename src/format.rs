//! Rendering citations back to text.
//!
//! [`rebuild`] recovers one [`Segment`] per fetch group, so a resolved
//! citation can be shown (or re-parsed) in its canonical short form.

use crate::parser::{ParsedCitation, Segment};
use crate::registry::BookRegistry;
use crate::resolver::FetchSegment;

/// Canonical text of a citation: `"Мф 18:18-22; 19:1-2; 19:13-15"`.
pub fn format_citation(citation: &ParsedCitation, registry: &BookRegistry) -> String {
    let locators: Vec<String> = citation.segments.iter().map(ToString::to_string).collect();
    format!("{} {}", registry.abbreviation(citation.book_id), locators.join("; "))
}

/// Canonical text for resolved segments, if they came from one book.
pub fn format_segments(segments: &[FetchSegment], registry: &BookRegistry) -> Option<String> {
    rebuild(segments).map(|citation| format_citation(&citation, registry))
}

/// Recover the parsed form of resolved segments.
///
/// Returns `None` for segments no citation resolves to: mixed books, gaps
/// inside a group, or an open-ended segment on its own.
pub fn rebuild(segments: &[FetchSegment]) -> Option<ParsedCitation> {
    let book_id = segments.first()?.book_id;
    if segments.iter().any(|s| s.book_id != book_id) {
        return None;
    }

    let segments = segments
        .chunk_by(|a, b| a.group == b.group)
        .map(rebuild_group)
        .collect::<Option<Vec<_>>>()?;

    Some(ParsedCitation { book_id, segments })
}

fn rebuild_group(group: &[FetchSegment]) -> Option<Segment> {
    let first = group.first()?;
    let last = group.last()?;
    let consecutive = group.windows(2).all(|w| w[1].chapter == w[0].chapter + 1);

    if group.len() == 1 {
        return match (first.verse_start, first.verse_end) {
            (None, None) => Some(Segment::WholeChapter { chapter: first.chapter }),
            (Some(verse), Some(end)) if verse == end => {
                Some(Segment::SingleVerse { chapter: first.chapter, verse })
            }
            (Some(verse_start), Some(verse_end)) => {
                Some(Segment::VerseRange { chapter: first.chapter, verse_start, verse_end })
            }
            _ => None,
        };
    }

    if !consecutive {
        return None;
    }

    if group.iter().all(FetchSegment::is_whole_chapter) {
        return Some(Segment::ChapterRange { chapter_start: first.chapter, chapter_end: last.chapter });
    }

    let middle_whole = group[1..group.len() - 1].iter().all(FetchSegment::is_whole_chapter);
    match (first.verse_start, last.verse_start, last.verse_end) {
        (Some(verse_start), Some(1), Some(verse_end)) if middle_whole => Some(Segment::CrossChapterRange {
            chapter_start: first.chapter,
            verse_start,
            chapter_end: last.chapter,
            verse_end,
        }),
        _ => None,
    }
}
