//! Plain-text report rendering.

use std::collections::HashMap;

use crate::models::BookMetadata;
use crate::plural::plural_form;

/// Render the two-section frequency report.
///
/// Section one lists the identifiers that occur exactly `target` times.
/// Section two prints one line per distinct occurrence count, with the
/// counting word in the grammatical form the count requires. Lines are
/// sorted ascending by occurrence count so the output is deterministic.
pub fn frequency_report(matching: &[String], distribution: &HashMap<usize, usize>) -> String {
    let mut out = String::from("Задача 1:\n");
    out.push_str(&format!("{matching:?}\n"));

    out.push_str("\nЗадача 2:\n");
    let mut entries: Vec<(usize, usize)> = distribution
        .iter()
        .map(|(count, tally)| (*count, *tally))
        .collect();
    entries.sort_unstable();
    for (count, tally) in entries {
        let form = plural_form(count, "раз", "раза", "раз");
        out.push_str(&format!("{tally} уникальных id встречались {count} {form}\n"));
    }
    out
}

/// Render the four labeled metadata lines.
pub fn metadata_report(meta: &BookMetadata) -> String {
    format!(
        "Title: {}\nAuthor: {}\nPublisher: {}\nYear: {}\n",
        meta.title, meta.author, meta.publisher, meta.year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Year;

    #[test]
    fn test_frequency_report() {
        let matching = vec!["A".to_string()];
        let distribution = HashMap::from([(3, 1), (2, 1), (1, 1)]);

        let report = frequency_report(&matching, &distribution);
        assert_eq!(
            report,
            "Задача 1:\n\
             [\"A\"]\n\
             \n\
             Задача 2:\n\
             1 уникальных id встречались 1 раз\n\
             1 уникальных id встречались 2 раза\n\
             1 уникальных id встречались 3 раза\n"
        );
    }

    #[test]
    fn test_frequency_report_empty() {
        let report = frequency_report(&[], &HashMap::new());
        assert_eq!(report, "Задача 1:\n[]\n\nЗадача 2:\n");
    }

    #[test]
    fn test_metadata_report() {
        let meta = BookMetadata {
            title: "Мы".to_string(),
            author: "Евгений Замятин".to_string(),
            publisher: "Чеховское издательство".to_string(),
            year: Year::Known(1952),
        };
        assert_eq!(
            metadata_report(&meta),
            "Title: Мы\nAuthor: Евгений Замятин\nPublisher: Чеховское издательство\nYear: 1952\n"
        );
    }

    #[test]
    fn test_metadata_report_placeholders() {
        assert_eq!(
            metadata_report(&BookMetadata::unknown()),
            "Title: Unknown Title\nAuthor: Unknown Author\nPublisher: Unknown Publisher\nYear: Unknown Year\n"
        );
    }
}
