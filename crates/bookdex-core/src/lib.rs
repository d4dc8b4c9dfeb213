pub mod error;
pub mod formats;
pub mod frequency;
pub mod models;
pub mod plural;
pub mod report;
pub mod table;

pub use error::{BookdexError, Result};
pub use formats::{BookFormat, read_book};
pub use models::{BookMetadata, Year};

pub use frequency::{count_occurrences, ids_with_multiplicity, occurrence_distribution};
pub use plural::plural_form;
pub use table::{ID_COLUMN, read_column, read_id_column};
