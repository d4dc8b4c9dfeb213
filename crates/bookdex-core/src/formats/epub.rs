//! EPUB metadata extraction.
//!
//! An EPUB is a zip container. `META-INF/container.xml` names the OPF
//! package document, whose `metadata` element carries the Dublin Core
//! fields this extractor reads: `title`, `creator`, `publisher`, `date`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::de::from_str;
use serde::Deserialize;
use zip::ZipArchive;

use crate::error::{BookdexError, Result};
use crate::formats::{TextValue, first_text};
use crate::models::{BookMetadata, UNKNOWN_AUTHOR, UNKNOWN_PUBLISHER, UNKNOWN_TITLE, Year};

const CONTAINER_PATH: &str = "META-INF/container.xml";

#[derive(Debug, Deserialize)]
struct Container {
    rootfiles: Rootfiles,
}

#[derive(Debug, Deserialize)]
struct Rootfiles {
    #[serde(rename = "rootfile", default)]
    rootfiles: Vec<Rootfile>,
}

#[derive(Debug, Deserialize)]
struct Rootfile {
    #[serde(rename = "@full-path")]
    full_path: String,
}

#[derive(Debug, Deserialize)]
struct Package {
    #[serde(rename = "metadata", alias = "opf:metadata")]
    metadata: Option<PackageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct PackageMetadata {
    #[serde(rename = "dc:title", alias = "title", default)]
    titles: Vec<TextValue>,
    #[serde(rename = "dc:creator", alias = "creator", default)]
    creators: Vec<TextValue>,
    #[serde(rename = "dc:publisher", alias = "publisher", default)]
    publishers: Vec<TextValue>,
    #[serde(rename = "dc:date", alias = "date", default)]
    dates: Vec<TextValue>,
}

/// Read the four metadata fields from an EPUB container.
///
/// Only the first occurrence of each Dublin Core element is used. The year
/// is parsed from the leading four characters of the date value.
pub fn extract(path: &Path) -> Result<BookMetadata> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let container: Container = from_str(&read_entry(&mut archive, CONTAINER_PATH)?)?;
    let opf_path = container
        .rootfiles
        .rootfiles
        .first()
        .map(|rootfile| rootfile.full_path.clone())
        .ok_or_else(|| BookdexError::InvalidEpub("container declares no rootfile".to_string()))?;

    let package: Package = from_str(&read_entry(&mut archive, &opf_path)?)?;
    let metadata = package.metadata.unwrap_or_default();

    Ok(BookMetadata {
        title: first_text(&metadata.titles).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: first_text(&metadata.creators).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        publisher: first_text(&metadata.publishers)
            .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string()),
        year: first_text(&metadata.dates)
            .map(|date| Year::from_date(&date))
            .unwrap_or(Year::Unknown),
    })
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Result<String> {
    let mut entry = archive.by_name(name)?;
    let mut contents = String::new();
    entry.read_to_string(&mut contents)?;
    Ok(contents)
}
