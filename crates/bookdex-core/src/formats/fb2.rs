//! FB2 (FictionBook 2.0) metadata extraction.
//!
//! FB2 is a single XML document. Title and author live under
//! `description/title-info`; publisher and year under
//! `description/publish-info`.

use std::fs;
use std::path::Path;

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::{BookdexError, Result};
use crate::formats::{TextValue, first_text};
use crate::models::{BookMetadata, UNKNOWN_AUTHOR, UNKNOWN_PUBLISHER, UNKNOWN_TITLE, Year};

/// Namespace every FictionBook 2.0 document must declare on its root.
pub const FB2_NAMESPACE: &str = "http://www.gribuser.ru/xml/fictionbook/2.0";

#[derive(Debug, Deserialize)]
struct FictionBook {
    #[serde(rename = "@xmlns")]
    xmlns: Option<String>,
    description: Option<Description>,
}

#[derive(Debug, Default, Deserialize)]
struct Description {
    #[serde(rename = "title-info")]
    title_info: Option<TitleInfo>,
    #[serde(rename = "publish-info")]
    publish_info: Option<PublishInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct TitleInfo {
    #[serde(rename = "book-title", default)]
    book_titles: Vec<TextValue>,
    #[serde(rename = "author", default)]
    authors: Vec<Author>,
}

#[derive(Debug, Deserialize)]
struct Author {
    #[serde(rename = "first-name")]
    first_name: Option<TextValue>,
    #[serde(rename = "last-name")]
    last_name: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
struct PublishInfo {
    #[serde(rename = "publisher", default)]
    publishers: Vec<TextValue>,
    #[serde(rename = "year", default)]
    years: Vec<TextValue>,
}

impl Author {
    /// First and last name joined with a space. A missing subfield is
    /// skipped; an author with neither yields `None`.
    fn full_name(&self) -> Option<String> {
        let parts: Vec<String> = [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_ref().and_then(TextValue::text))
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Read the four metadata fields from an FB2 document.
pub fn extract(path: &Path) -> Result<BookMetadata> {
    let xml = fs::read_to_string(path)?;
    let book: FictionBook = from_str(&xml)?;

    if book.xmlns.as_deref() != Some(FB2_NAMESPACE) {
        return Err(BookdexError::InvalidFb2(format!(
            "document namespace is {}, expected {FB2_NAMESPACE}",
            book.xmlns.as_deref().unwrap_or("missing"),
        )));
    }

    let description = book.description.unwrap_or_default();
    let title_info = description.title_info.unwrap_or_default();
    let publish_info = description.publish_info.unwrap_or_default();

    Ok(BookMetadata {
        title: first_text(&title_info.book_titles).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: title_info
            .authors
            .first()
            .and_then(Author::full_name)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        publisher: first_text(&publish_info.publishers)
            .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string()),
        year: first_text(&publish_info.years)
            .map(|year| Year::parse(&year))
            .unwrap_or(Year::Unknown),
    })
}
