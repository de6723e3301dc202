//! Formatting helpers for presenting shelf metrics.

pub fn format_rating(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_pages(value: u32) -> String {
    format!("{value} pages")
}

pub fn format_days(value: i64) -> String {
    if value == 1 {
        "1 day".into()
    } else {
        format!("{value} days")
    }
}
