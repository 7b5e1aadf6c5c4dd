//! Chapter-bound validation against the book registry.
//!
//! Verse bounds are not checked here: the registry holds no per-chapter verse
//! counts. The assembler checks verses against the provider instead.

use crate::error::ValidationError;
use crate::registry::BookRegistry;
use crate::resolver::FetchSegment;

/// Check every segment's chapter lies within its book.
pub fn validate(segments: &[FetchSegment], registry: &BookRegistry) -> Result<(), ValidationError> {
    for segment in segments {
        let max = registry.chapter_count(segment.book_id);
        if segment.chapter == 0 || segment.chapter > max {
            return Err(ValidationError::ChapterOutOfRange {
                book_id: segment.book_id,
                chapter: segment.chapter,
                max,
            });
        }
    }
    Ok(())
}
