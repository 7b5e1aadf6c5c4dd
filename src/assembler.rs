//! Text assembler: fetches resolved segments and stitches them in order.
//!
//! Fetches run in parallel but results are joined in input order. Pieces of
//! one citation segment (chapters of a range, head and tail of a cross-chapter
//! range) are joined as one passage; distinct segments get the separator.
//! Any failure aborts the whole assembly.

use rayon::prelude::*;

use crate::constants::assembly::{DEFAULT_PASSAGE_JOINER, DEFAULT_SEGMENT_SEPARATOR};
use crate::error::AssemblyError;
use crate::format::format_segments;
use crate::provider::ScriptureProvider;
use crate::registry::BookRegistry;
use crate::resolver::{close_ranges, FetchSegment};

/// Presentation choices for assembled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingOptions {
    /// Placed between texts of different citation segments.
    pub segment_separator: String,
    /// Placed between pieces of the same citation segment.
    pub passage_joiner: String,
    /// Prefix each citation segment with its reference on its own line.
    pub headings: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            segment_separator: DEFAULT_SEGMENT_SEPARATOR.to_string(),
            passage_joiner: DEFAULT_PASSAGE_JOINER.to_string(),
            headings: false,
        }
    }
}

/// Assemble with default formatting.
pub fn assemble(
    segments: &[FetchSegment],
    provider: &dyn ScriptureProvider,
) -> Result<String, AssemblyError> {
    assemble_with(segments, provider, &FormattingOptions::default())
}

/// Fetch every segment and join the texts in order.
pub fn assemble_with(
    segments: &[FetchSegment],
    provider: &dyn ScriptureProvider,
    options: &FormattingOptions,
) -> Result<String, AssemblyError> {
    let mut segments = segments.to_vec();
    close_ranges(&mut segments, provider)?;
    check_verses(&segments, provider)?;

    let texts = segments
        .par_iter()
        .map(|s| {
            provider
                .get_text(s.book_id, s.chapter, s.verse_start, s.verse_end)
                .inspect_err(|e| {
                    tracing::warn!("Failed to fetch book {} chapter {}: {e}", s.book_id, s.chapter);
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pieces: Vec<(FetchSegment, String)> = segments.into_iter().zip(texts).collect();
    let mut out = String::new();

    for (index, group) in pieces.chunk_by(|a, b| a.0.group == b.0.group).enumerate() {
        if index > 0 {
            out.push_str(&options.segment_separator);
        }
        if options.headings {
            let bounds: Vec<FetchSegment> = group.iter().map(|(s, _)| *s).collect();
            if let Some(heading) = format_segments(&bounds, BookRegistry::global()) {
                out.push_str(&heading);
                out.push('\n');
            }
        }
        let passage: Vec<&str> = group.iter().map(|(_, text)| text.as_str()).collect();
        out.push_str(&passage.join(&options.passage_joiner));
    }

    Ok(out)
}

/// Reject verses past the provider's count for their chapter, where known.
fn check_verses(
    segments: &[FetchSegment],
    provider: &dyn ScriptureProvider,
) -> Result<(), AssemblyError> {
    for segment in segments {
        let Some(max) = provider.chapter_verse_count(segment.book_id, segment.chapter) else {
            continue;
        };
        let out_of_range = [segment.verse_start, segment.verse_end]
            .into_iter()
            .flatten()
            .find(|&verse| verse > max);
        if let Some(verse) = out_of_range {
            return Err(AssemblyError::VerseOutOfRange {
                book_id: segment.book_id,
                chapter: segment.chapter,
                verse,
                max,
            });
        }
    }
    Ok(())
}
