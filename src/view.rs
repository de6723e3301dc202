//! One full dashboard recomputation per facet change. Nothing is cached
//! between passes; every view is rebuilt from the immutable catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{panels_for, BookPanel, BookRecord};
use crate::filters::{apply, FacetSelection};
use crate::metrics::{
    author_text, duration_ranking, language_counts, page_ranking, reading_progress, LanguageCount,
    PageCount, ProgressPoint, ReadingDuration, ShelfSummary,
};

/// Everything the presentation layer needs for one rendering pass: the
/// filtered records plus every derived table. `summary: None` and empty
/// tables are the empty-state signal — the caller renders its "no data to
/// display" notice instead of the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfView {
    pub records: Vec<BookRecord>,
    pub summary: Option<ShelfSummary>,
    pub page_ranking: Vec<PageCount>,
    pub duration_ranking: Vec<ReadingDuration>,
    pub progress: Vec<ProgressPoint>,
    pub languages: Vec<LanguageCount>,
    pub author_text: String,
    pub panels: Vec<BookPanel>,
}

impl ShelfView {
    /// Filter the catalog by `selection` and derive every view in one pass.
    pub fn build(records: &[BookRecord], selection: &FacetSelection) -> Self {
        let filtered = apply(records, selection);
        Self {
            summary: ShelfSummary::from_records(&filtered),
            page_ranking: page_ranking(&filtered),
            duration_ranking: duration_ranking(&filtered),
            progress: reading_progress(&filtered),
            languages: language_counts(&filtered),
            author_text: author_text(&filtered),
            panels: panels_for(&filtered),
            records: filtered,
        }
    }

    /// True when the pass matched nothing and the empty state should render.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::filters::MonthFilter;

    #[test]
    fn rebuilding_from_the_catalog_is_stable() {
        let selection = FacetSelection::default();
        let first = ShelfView::build(catalog(), &selection);
        let second = ShelfView::build(catalog(), &selection);
        assert_eq!(first, second);
    }

    #[test]
    fn narrowing_a_pass_never_touches_the_catalog() {
        let before = catalog().to_vec();
        let selection = FacetSelection {
            month: MonthFilter::Month("February".into()),
            max_pages: Some(200),
            ..FacetSelection::default()
        };
        let view = ShelfView::build(catalog(), &selection);
        assert_eq!(view.records.len(), 1);
        assert_eq!(catalog(), before.as_slice());
    }
}
