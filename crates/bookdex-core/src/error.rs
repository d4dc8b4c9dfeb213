use thiserror::Error;

/// All errors that can occur in bookdex-core.
#[derive(Debug, Error)]
pub enum BookdexError {
    #[error("Column not found in header: {0}")]
    MissingColumn(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid EPUB container: {0}")]
    InvalidEpub(String),

    #[error("Invalid FB2 document: {0}")]
    InvalidFb2(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),
}

pub type Result<T> = std::result::Result<T, BookdexError>;
