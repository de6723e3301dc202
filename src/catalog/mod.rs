//! In-memory record store for the 2024 reading log.

pub mod content;
pub mod data;
pub mod record;

pub use content::{content_for, panels_for, BookContent, BookPanel};
pub use data::catalog;
pub use record::BookRecord;

/// Look up a record by its title. Titles are unique across the catalog.
pub fn find<'a>(records: &'a [BookRecord], title: &str) -> Option<&'a BookRecord> {
    records.iter().find(|record| record.title == title)
}

/// Author for a title, or the displayable lookup-miss sentinel.
pub fn author_of(records: &[BookRecord], title: &str) -> String {
    field_or_sentinel(records, title, |record| record.author.clone())
}

/// Genre for a title, or the displayable lookup-miss sentinel.
pub fn genre_of(records: &[BookRecord], title: &str) -> String {
    field_or_sentinel(records, title, |record| record.genre.clone())
}

/// Language for a title, or the displayable lookup-miss sentinel.
pub fn language_of(records: &[BookRecord], title: &str) -> String {
    field_or_sentinel(records, title, |record| record.language.clone())
}

/// Page count for a title, or the displayable lookup-miss sentinel.
pub fn pages_of(records: &[BookRecord], title: &str) -> String {
    field_or_sentinel(records, title, |record| record.pages.to_string())
}

fn field_or_sentinel(
    records: &[BookRecord],
    title: &str,
    pick: impl Fn(&BookRecord) -> String,
) -> String {
    find(records, title)
        .map(pick)
        .unwrap_or_else(|| format!("No information found for '{title}'"))
}
