//! Core engine for the 2024 Bookshelf dashboard. The presentation layer
//! reads facet selections from its widgets and calls in here for the
//! filtered records and chart-ready aggregates of one rendering pass.

pub mod catalog;
pub mod filters;
pub mod format;
pub mod metrics;
pub mod view;

pub use catalog::{catalog as shelf, BookRecord};
pub use filters::{FacetSelection, MonthFilter};
pub use view::ShelfView;
