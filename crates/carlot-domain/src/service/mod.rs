//! Domain services

pub mod filter;

pub use filter::{distinct_makes, filter_catalog, CatalogBounds, Criteria, PriceRange, YearRange};
