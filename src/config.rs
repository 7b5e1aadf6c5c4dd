//! Library configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::assembler::FormattingOptions;
use crate::constants::assembly::DEFAULT_SEGMENT_SEPARATOR;
use crate::constants::config::{DATA_DIR_NAME, DEFAULT_TRANSLATION};
use crate::error::{ConfigError, Result};
use crate::provider::VerseNumbers;

/// Configuration for text lookup and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `<translation>.json` files
    pub data_path: PathBuf,
    /// Translation code, the file stem inside `data_path`
    pub translation: String,
    /// Placed between texts of different citation segments
    pub segment_separator: String,
    /// Verse numbering in provider output
    pub verse_numbers: VerseNumbers,
    /// Prefix each segment with its reference
    pub headings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: dirs::data_dir()
                .map_or_else(|| PathBuf::from(DATA_DIR_NAME), |d| d.join(DATA_DIR_NAME)),
            translation: DEFAULT_TRANSLATION.to_string(),
            segment_separator: DEFAULT_SEGMENT_SEPARATOR.to_string(),
            verse_numbers: VerseNumbers::default(),
            headings: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok()).map_err(Into::into)
    }

    /// Build configuration from any key lookup, starting from defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> std::result::Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("LECTIO_DATA_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::new(
                    "LECTIO_DATA_PATH is empty",
                    "Unset it to use the default data directory, or point it at a folder of translation files",
                ));
            }
            config.data_path = PathBuf::from(shellexpand::tilde(path.trim()).to_string());
        }

        if let Some(translation) = lookup("LECTIO_TRANSLATION") {
            let translation = translation.trim();
            if translation.is_empty() || translation.contains(['/', '\\']) {
                return Err(ConfigError::new(
                    format!("invalid LECTIO_TRANSLATION '{translation}'"),
                    "Use a bare translation code such as 'rst'; the file is read from LECTIO_DATA_PATH",
                ));
            }
            config.translation = translation.to_string();
        }

        if let Some(separator) = lookup("LECTIO_SEGMENT_SEPARATOR") {
            config.segment_separator = unescape(&separator);
        }

        if let Some(numbers) = lookup("LECTIO_VERSE_NUMBERS") {
            config.verse_numbers = VerseNumbers::from_setting(&numbers).ok_or_else(|| {
                ConfigError::new(
                    format!("invalid LECTIO_VERSE_NUMBERS '{numbers}'"),
                    "Use one of: none, plain, superscript",
                )
            })?;
        }

        if let Some(headings) = lookup("LECTIO_HEADINGS") {
            config.headings = parse_flag(&headings).ok_or_else(|| {
                ConfigError::new(format!("invalid LECTIO_HEADINGS '{headings}'"), "Use true or false")
            })?;
        }

        Ok(config)
    }

    /// Path of the configured translation file.
    pub fn translation_path(&self) -> PathBuf {
        self.data_path.join(format!("{}.json", self.translation))
    }

    /// Assembler options derived from this configuration.
    pub fn formatting(&self) -> FormattingOptions {
        FormattingOptions {
            segment_separator: self.segment_separator.clone(),
            headings: self.headings,
            ..FormattingOptions::default()
        }
    }
}

/// Honour `\n` and `\t` escapes, since .env values are single-line.
fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
