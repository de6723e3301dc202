//! Summary statistics and chart-ready derived tables for a filtered shelf.
//! Everything here is a pure function of the subset it is handed; an empty
//! subset yields `None` or an empty table, never a panic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::catalog::BookRecord;

/// Headline numbers for the current filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfSummary {
    pub books_read: usize,
    /// Mean rating, rounded to two decimals.
    pub average_rating: f64,
    pub favorite_genre: String,
}

impl ShelfSummary {
    /// `None` on an empty subset — the caller's empty-state signal. The
    /// favorite genre is the modal label; equal counts break to the
    /// alphabetically first label.
    pub fn from_records(records: &[BookRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mean = records.iter().map(|r| r.rating).sum::<f64>() / records.len() as f64;

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.genre.as_str()).or_default() += 1;
        }
        let favorite = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(genre, _)| (*genre).to_string())?;

        Some(Self {
            books_read: records.len(),
            average_rating: round2(mean),
            favorite_genre: favorite,
        })
    }
}

/// One bar of the page-count chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCount {
    pub title: String,
    pub pages: u32,
}

/// One bar of the reading-duration chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingDuration {
    pub title: String,
    pub days: i64,
}

/// One point of the cumulative-pages line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub end_date: String,
    pub total_pages: u64,
}

/// One row of the language frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub books: usize,
}

/// Titles with page counts, pages descending. Ties keep record order.
pub fn page_ranking(records: &[BookRecord]) -> Vec<PageCount> {
    let mut rows: Vec<PageCount> = records
        .iter()
        .map(|record| PageCount {
            title: record.title.clone(),
            pages: record.pages,
        })
        .collect();
    rows.sort_by(|a, b| b.pages.cmp(&a.pages));
    rows
}

/// Titles with whole-day reading durations, longest first. Records whose
/// dates fail to parse are skipped.
pub fn duration_ranking(records: &[BookRecord]) -> Vec<ReadingDuration> {
    let mut rows: Vec<ReadingDuration> = records
        .iter()
        .filter_map(|record| {
            Some(ReadingDuration {
                title: record.title.clone(),
                days: record.duration_days()?,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.days.cmp(&a.days));
    rows
}

/// Running page total over records ordered by end date ascending. The series
/// is non-decreasing by construction.
pub fn reading_progress(records: &[BookRecord]) -> Vec<ProgressPoint> {
    let mut dated: Vec<(Date, &BookRecord)> = records
        .iter()
        .filter_map(|record| Some((record.finished()?, record)))
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    let mut total: u64 = 0;
    dated
        .into_iter()
        .map(|(_, record)| {
            total += u64::from(record.pages);
            ProgressPoint {
                end_date: record.end_date.clone(),
                total_pages: total,
            }
        })
        .collect()
}

/// Frequency of each language, most common first, ties alphabetical.
pub fn language_counts(records: &[BookRecord]) -> Vec<LanguageCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.language.as_str()).or_default() += 1;
    }
    let mut rows: Vec<LanguageCount> = counts
        .into_iter()
        .map(|(language, books)| LanguageCount {
            language: language.to_string(),
            books,
        })
        .collect();
    rows.sort_by(|a, b| b.books.cmp(&a.books).then_with(|| a.language.cmp(&b.language)));
    rows
}

/// Author fields joined with `", "` — input for the external word-cloud
/// renderer, which handles its own tokenization.
pub fn author_text(records: &[BookRecord]) -> String {
    records
        .iter()
        .map(|record| record.author.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
