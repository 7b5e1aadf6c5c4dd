//! `Lectio` - scripture citation parsing, resolution and passage assembly.
//!
//! Turns human-written references such as `"Ин 3:16-18"` or
//! `"Мф 18:18-22; 19:1-2"` into fetch segments over the 66-book Synodal
//! canon, and stitches the referenced text together from any
//! [`ScriptureProvider`].
//!
//! ```no_run
//! use lectio::{parse_and_assemble, JsonBibleProvider, Config};
//!
//! # fn main() -> lectio::Result<()> {
//! let provider = JsonBibleProvider::from_config(&Config::load()?)?;
//! let text = parse_and_assemble("Ин 3:16-18", &provider)?;
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod parser;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod validator;

pub use assembler::{assemble, assemble_with, FormattingOptions};
pub use config::Config;
pub use error::{CoreError, ErrorKind, Result};
pub use format::{format_citation, format_segments};
pub use parser::{parse, ParsedCitation, Segment};
pub use provider::{JsonBibleProvider, MemoryProvider, ScriptureProvider, VerseNumbers};
pub use registry::BookRegistry;
pub use resolver::{resolve, FetchSegment};
pub use types::{BookId, Testament};

/// Parse, resolve and validate a citation against the built-in registry.
///
/// Cross-chapter heads come back open-ended; see [`parse_and_resolve_exact`].
pub fn parse_and_resolve(raw: &str) -> Result<Vec<FetchSegment>> {
    let registry = BookRegistry::global();
    let citation = parser::parse_with(raw, registry)?;
    let segments = resolve(&citation, registry)?;
    validator::validate(&segments, registry)?;
    Ok(segments)
}

/// Like [`parse_and_resolve`], with every open end closed by `provider`.
pub fn parse_and_resolve_exact(raw: &str, provider: &dyn ScriptureProvider) -> Result<Vec<FetchSegment>> {
    let mut segments = parse_and_resolve(raw)?;
    resolver::close_ranges(&mut segments, provider)?;
    Ok(segments)
}

/// Resolve a citation and assemble its text with default formatting.
pub fn parse_and_assemble(raw: &str, provider: &dyn ScriptureProvider) -> Result<String> {
    parse_and_assemble_with(raw, provider, &FormattingOptions::default())
}

/// Resolve a citation and assemble its text.
pub fn parse_and_assemble_with(
    raw: &str,
    provider: &dyn ScriptureProvider,
    options: &FormattingOptions,
) -> Result<String> {
    let segments = parse_and_resolve(raw)?;
    let text = assemble_with(&segments, provider, options)?;
    tracing::debug!("Assembled {} characters for '{raw}'", text.len());
    Ok(text)
}
