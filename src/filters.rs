//! Facet selections and the filter engine. Filters are independent row
//! predicates: ANDed across facets, ORed within a multi-valued facet, and
//! they commute, so the presentation layer may apply them in any order.

use serde::{Deserialize, Serialize};

use crate::catalog::BookRecord;

/// String columns a facet can select on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextFacet {
    Month,
    Genre,
    Author,
    Language,
}

impl TextFacet {
    pub fn value(self, record: &BookRecord) -> &str {
        match self {
            TextFacet::Month => &record.month,
            TextFacet::Genre => &record.genre,
            TextFacet::Author => &record.author,
            TextFacet::Language => &record.language,
        }
    }
}

/// Month facet. `EntireYear` is the no-filter default, shown to the user as
/// "Entire Year".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonthFilter {
    #[default]
    EntireYear,
    Month(String),
}

impl MonthFilter {
    pub fn label(&self) -> &str {
        match self {
            MonthFilter::EntireYear => "Entire Year",
            MonthFilter::Month(name) => name,
        }
    }

    pub fn month(&self) -> Option<&str> {
        match self {
            MonthFilter::EntireYear => None,
            MonthFilter::Month(name) => Some(name),
        }
    }
}

/// Everything the sidebar widgets hand to the engine for one rendering pass.
/// `max_pages: None` means no page cap; `Some(n)` keeps records with
/// `pages <= n`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FacetSelection {
    pub month: MonthFilter,
    pub genres: Vec<String>,
    pub authors: Vec<String>,
    pub max_pages: Option<u32>,
}

/// Option universes the widgets should offer for the current selection:
/// genre options narrow to the active month, author options to month+genre,
/// and the page slider bound to month+genre+author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub months: Vec<String>,
    pub genres: Vec<String>,
    pub authors: Vec<String>,
    pub max_pages: u32,
}

/// Keep records whose facet value is one of `selected`. An empty selection
/// means "no filter applied" and returns the input unchanged. Matching is
/// exact and case-sensitive.
pub fn filter_by_facet(
    records: &[BookRecord],
    facet: TextFacet,
    selected: &[String],
) -> Vec<BookRecord> {
    if selected.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| selected.iter().any(|value| value == facet.value(record)))
        .cloned()
        .collect()
}

/// Apply every facet of `selection`, ANDed.
pub fn apply(records: &[BookRecord], selection: &FacetSelection) -> Vec<BookRecord> {
    let mut subset = match &selection.month {
        MonthFilter::EntireYear => records.to_vec(),
        MonthFilter::Month(name) => {
            filter_by_facet(records, TextFacet::Month, std::slice::from_ref(name))
        }
    };
    subset = filter_by_facet(&subset, TextFacet::Genre, &selection.genres);
    subset = filter_by_facet(&subset, TextFacet::Author, &selection.authors);
    if let Some(cap) = selection.max_pages {
        subset.retain(|record| record.pages <= cap);
    }
    subset
}

/// Distinct values of one facet, in encounter order.
pub fn unique_values(records: &[BookRecord], facet: TextFacet) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let value = facet.value(record);
        if !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Compute the option universes for the current selection.
pub fn facet_options(records: &[BookRecord], selection: &FacetSelection) -> FacetOptions {
    let months = unique_values(records, TextFacet::Month);

    let month_subset = match &selection.month {
        MonthFilter::EntireYear => records.to_vec(),
        MonthFilter::Month(name) => {
            filter_by_facet(records, TextFacet::Month, std::slice::from_ref(name))
        }
    };
    let genres = unique_values(&month_subset, TextFacet::Genre);

    let genre_subset = filter_by_facet(&month_subset, TextFacet::Genre, &selection.genres);
    let authors = unique_values(&genre_subset, TextFacet::Author);

    let author_subset = filter_by_facet(&genre_subset, TextFacet::Author, &selection.authors);
    let max_pages = author_subset
        .iter()
        .map(|record| record.pages)
        .max()
        .unwrap_or(0);

    FacetOptions {
        months,
        genres,
        authors,
        max_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_selection_is_identity() {
        let records = catalog();
        let out = filter_by_facet(records, TextFacet::Genre, &[]);
        assert_eq!(out, records.to_vec());
    }

    #[test]
    fn membership_filter_is_sound_and_complete() {
        let records = catalog();
        let selected = strings(&["Fantasy", "Nonfiction"]);
        let out = filter_by_facet(records, TextFacet::Genre, &selected);

        for record in &out {
            assert!(selected.contains(&record.genre));
        }
        for record in records {
            if selected.contains(&record.genre) {
                assert!(out.contains(record));
            }
        }
    }

    #[test]
    fn language_is_filterable_like_any_text_facet() {
        let out = filter_by_facet(catalog(), TextFacet::Language, &strings(&["Japanese"]));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.author == "Gege Akutami"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let out = filter_by_facet(catalog(), TextFacet::Genre, &strings(&["fantasy"]));
        assert!(out.is_empty());
    }

    #[test]
    fn facets_commute() {
        let records = catalog();
        let genres = strings(&["Fantasy"]);
        let authors = strings(&["Sarah J. Maas"]);

        let genre_first = filter_by_facet(
            &filter_by_facet(records, TextFacet::Genre, &genres),
            TextFacet::Author,
            &authors,
        );
        let author_first = filter_by_facet(
            &filter_by_facet(records, TextFacet::Author, &authors),
            TextFacet::Genre,
            &genres,
        );
        assert_eq!(genre_first, author_first);
        assert_eq!(genre_first.len(), 2);
    }

    #[test]
    fn page_cap_is_inclusive() {
        let selection = FacetSelection {
            max_pages: Some(419),
            ..FacetSelection::default()
        };
        let out = apply(catalog(), &selection);
        assert!(out.iter().any(|r| r.pages == 419));
        assert!(out.iter().all(|r| r.pages <= 419));
    }

    #[test]
    fn month_restricts_option_universes() {
        let selection = FacetSelection {
            month: MonthFilter::Month("January".into()),
            ..FacetSelection::default()
        };
        let options = facet_options(catalog(), &selection);
        assert_eq!(options.months, strings(&["January", "February"]));
        assert_eq!(
            options.genres,
            strings(&["Nonfiction", "Fantasy", "Science Fiction"])
        );
        assert_eq!(options.max_pages, 544);
    }

    #[test]
    fn genre_selection_narrows_author_options() {
        let selection = FacetSelection {
            genres: strings(&["Fantasy"]),
            ..FacetSelection::default()
        };
        let options = facet_options(catalog(), &selection);
        assert_eq!(options.authors, strings(&["Gege Akutami", "Sarah J. Maas"]));
        assert_eq!(options.max_pages, 624);
    }

    #[test]
    fn unmatched_selection_is_an_empty_result_not_an_error() {
        let selection = FacetSelection {
            month: MonthFilter::Month("January".into()),
            genres: strings(&["Romance"]),
            ..FacetSelection::default()
        };
        assert!(apply(catalog(), &selection).is_empty());
        assert_eq!(facet_options(catalog(), &selection).max_pages, 0);
    }

    #[test]
    fn default_selection_keeps_everything() {
        let out = apply(catalog(), &FacetSelection::default());
        assert_eq!(out.len(), catalog().len());
    }
}
