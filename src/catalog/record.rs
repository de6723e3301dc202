//! Book record type and date handling for the reading log.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

/// One book on the shelf. Dates stay in their catalog form (`MM-DD-YYYY`
/// strings) and are parsed on demand; derived values are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub month: String,
    pub title: String,
    /// May hold several comma-separated names.
    pub author: String,
    pub genre: String,
    pub language: String,
    pub start_date: String,
    pub end_date: String,
    pub rating: f64,
    pub pages: u32,
}

impl BookRecord {
    pub fn started(&self) -> Option<Date> {
        parse_date(&self.start_date)
    }

    pub fn finished(&self) -> Option<Date> {
        parse_date(&self.end_date)
    }

    /// Whole days between start and end. A same-day read counts as zero.
    pub fn duration_days(&self) -> Option<i64> {
        Some((self.finished()? - self.started()?).whole_days())
    }

    /// Catalog invariants: parseable dates in order, positive page count,
    /// rating on the 0–5 scale.
    pub fn is_well_formed(&self) -> bool {
        let Some(days) = self.duration_days() else {
            return false;
        };
        days >= 0 && self.pages > 0 && (0.0..=5.0).contains(&self.rating)
    }
}

/// Parse a catalog date like `01-27-2024`; `None` on malformed input.
pub(crate) fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &format_description!("[month]-[day]-[year]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: &str, end: &str) -> BookRecord {
        BookRecord {
            month: "January".into(),
            title: "Test Book".into(),
            author: "Test Author".into(),
            genre: "Fantasy".into(),
            language: "English".into(),
            start_date: start.into(),
            end_date: end.into(),
            rating: 4.5,
            pages: 300,
        }
    }

    #[test]
    fn parses_catalog_dates() {
        let date = parse_date("01-27-2024").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month() as u8, 1);
        assert_eq!(date.day(), 27);
        assert!(parse_date("2024-01-27").is_none());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn same_day_read_has_zero_duration() {
        assert_eq!(record("02-04-2024", "02-04-2024").duration_days(), Some(0));
    }

    #[test]
    fn duration_spans_a_year_boundary() {
        assert_eq!(record("12-26-2023", "01-02-2024").duration_days(), Some(7));
    }

    #[test]
    fn malformed_dates_fail_the_invariant_check() {
        assert!(!record("soon", "later").is_well_formed());
        assert!(!record("02-04-2024", "02-01-2024").is_well_formed());
        assert!(record("02-01-2024", "02-04-2024").is_well_formed());
    }
}
