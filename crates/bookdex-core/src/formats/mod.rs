//! E-book container formats and metadata extraction.

use std::fmt;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error::{BookdexError, Result};
use crate::models::BookMetadata;

pub mod epub;
pub mod fb2;

/// Supported e-book container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFormat {
    Epub,
    Fb2,
}

impl BookFormat {
    /// Classify a path by its suffix. Matching is case-sensitive, so
    /// `book.EPUB` is not recognized.
    pub fn from_path(path: &Path) -> Option<BookFormat> {
        let name = path.to_str()?;
        if name.ends_with(".epub") {
            Some(BookFormat::Epub)
        } else if name.ends_with(".fb2") {
            Some(BookFormat::Fb2)
        } else {
            None
        }
    }
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookFormat::Epub => f.write_str("EPUB"),
            BookFormat::Fb2 => f.write_str("FB2"),
        }
    }
}

/// Extract metadata from an e-book file, best effort.
///
/// The only error surfaced to the caller is an unsupported suffix. A file
/// that dispatches but fails to parse — corrupt archive, malformed XML,
/// wrong namespace — is reported as a warning and yields the
/// all-placeholder record instead of an error.
pub fn read_book(path: &Path) -> Result<BookMetadata> {
    let format = BookFormat::from_path(path)
        .ok_or_else(|| BookdexError::UnsupportedFormat(path.display().to_string()))?;

    let extracted = match format {
        BookFormat::Epub => epub::extract(path),
        BookFormat::Fb2 => fb2::extract(path),
    };

    Ok(extracted.unwrap_or_else(|err| {
        warn!("Error reading {format} file {}: {err}", path.display());
        BookMetadata::unknown()
    }))
}

/// A markup element whose text content is all we care about. Attributes on
/// the element are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct TextValue {
    #[serde(rename = "$text")]
    value: Option<String>,
}

impl TextValue {
    pub(crate) fn text(&self) -> Option<String> {
        let trimmed = self.value.as_deref()?.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// First non-empty text among repeated elements.
pub(crate) fn first_text(values: &[TextValue]) -> Option<String> {
    values.iter().find_map(TextValue::text)
}
