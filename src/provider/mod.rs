//! Scripture text providers.
//!
//! The core never stores text itself. Anything that can return a chapter's
//! verses implements [`ScriptureProvider`]; the backend is chosen once, at
//! startup, by whoever constructs it.

mod json;
mod memory;

pub use json::JsonBibleProvider;
pub use memory::MemoryProvider;

use crate::constants::assembly::SUPERSCRIPT_DIGITS;
use crate::error::ProviderError;
use crate::types::BookId;

/// Source of verse text and chapter lengths.
///
/// Implementations must be safe to call from several threads at once; the
/// assembler fetches segments in parallel.
pub trait ScriptureProvider: Send + Sync {
    /// Text of the given verses.
    ///
    /// Both bounds `None` means the whole chapter; only `verse_end` `None`
    /// means through the end of the chapter.
    fn get_text(
        &self,
        book_id: BookId,
        chapter: u32,
        verse_start: Option<u32>,
        verse_end: Option<u32>,
    ) -> Result<String, ProviderError>;

    /// Exact number of verses in a chapter, if known.
    fn chapter_verse_count(&self, book_id: BookId, chapter: u32) -> Option<u32>;
}

/// How a provider marks verse numbers in returned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerseNumbers {
    /// Plain running text.
    #[default]
    Hidden,
    /// `16 For God so loved...`
    Plain,
    /// `¹⁶For God so loved...`
    Superscript,
}

impl VerseNumbers {
    /// Parse a setting value (`none`, `plain`, `superscript`, or a boolean).
    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" | "hidden" | "false" | "0" | "off" => Some(Self::Hidden),
            "plain" | "true" | "1" | "on" => Some(Self::Plain),
            "superscript" | "super" => Some(Self::Superscript),
            _ => None,
        }
    }
}

/// Convert a number to superscript Unicode characters
fn to_superscript(n: u32) -> String {
    n.to_string()
        .bytes()
        .map(|b| SUPERSCRIPT_DIGITS[usize::from(b - b'0')])
        .collect()
}

/// Join numbered verses into running text.
fn render_verses<'a>(verses: impl Iterator<Item = (u32, &'a str)>, numbers: VerseNumbers) -> String {
    let mut text = String::new();
    for (number, verse) in verses {
        // Normalize whitespace in source text
        let clean: String = verse.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            text.push(' ');
        }
        match numbers {
            VerseNumbers::Hidden => {}
            VerseNumbers::Plain => {
                text.push_str(&number.to_string());
                text.push(' ');
            }
            VerseNumbers::Superscript => text.push_str(&to_superscript(number)),
        }
        text.push_str(&clean);
    }
    text
}
