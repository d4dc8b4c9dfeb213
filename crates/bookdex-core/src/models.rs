use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder used when a title cannot be located.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Placeholder used when an author cannot be located.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Placeholder used when a publisher cannot be located.
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
/// Placeholder used when a publication year cannot be located or parsed.
pub const UNKNOWN_YEAR: &str = "Unknown Year";

/// Publication year of a book.
///
/// Source documents carry the year as free text, so a value is either a
/// parsed number or the placeholder. Callers must handle both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Year {
    Known(i32),
    Unknown,
}

impl Year {
    /// Parse a year from free text, e.g. the FB2 `<year>` element.
    pub fn parse(text: &str) -> Year {
        text.trim()
            .parse()
            .map(Year::Known)
            .unwrap_or(Year::Unknown)
    }

    /// Parse a year from the leading four characters of a date string,
    /// e.g. the EPUB `dc:date` value `2023-05-01`.
    pub fn from_date(text: &str) -> Year {
        let trimmed = text.trim();
        Year::parse(trimmed.get(..4).unwrap_or(trimmed))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(year) => write!(f, "{year}"),
            Year::Unknown => f.write_str(UNKNOWN_YEAR),
        }
    }
}

// JSON carries a number when the year is known, the placeholder otherwise.
impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Year::Known(year) => serializer.serialize_i32(*year),
            Year::Unknown => serializer.serialize_str(UNKNOWN_YEAR),
        }
    }
}

/// Metadata extracted from an e-book container.
///
/// Every field degrades independently to its placeholder when the source
/// document does not carry it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: Year,
}

impl BookMetadata {
    /// The all-placeholder record, returned when a container cannot be read.
    pub fn unknown() -> Self {
        Self::default()
    }
}

impl Default for BookMetadata {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            publisher: UNKNOWN_PUBLISHER.to_string(),
            year: Year::Unknown,
        }
    }
}
