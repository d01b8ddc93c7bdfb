//! Catalog filtering service
//!
//! Pure functions mapping (available catalog, criteria) to the subset to
//! display. The pipeline holds no state and is recomputed per criteria
//! change; whichever criteria arrive last win. All active criteria are
//! ANDed and the result keeps the input catalog's order.

use carlot_types::Car;
use serde::{Deserialize, Serialize};

/// Inclusive price range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Both bounds inclusive; a `min == max` range matches that single value
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Inclusive model-year range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

/// User-chosen filter criteria
///
/// `None` means "no filter" for every field. An empty search or make string
/// also means "no filter": the browsing UI's cleared text box and its
/// "All Makes" choice both arrive as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Case-insensitive substring match against make, model, or description
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub price: Option<PriceRange>,
    #[serde(default)]
    pub year: Option<YearRange>,
    /// Exact make match
    #[serde(default)]
    pub make: Option<String>,
}

impl Criteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_price(mut self, min: u64, max: u64) -> Self {
        self.price = Some(PriceRange::new(min, max));
        self
    }

    pub fn with_year(mut self, min: i32, max: i32) -> Self {
        self.year = Some(YearRange::new(min, max));
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }
}

/// Observed price and year extremes across a catalog snapshot
///
/// The browsing UI seeds its range sliders from these bounds. An empty
/// catalog has no bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogBounds {
    pub price: PriceRange,
    pub year: YearRange,
}

impl CatalogBounds {
    pub fn of(cars: &[Car]) -> Option<Self> {
        let first = cars.first()?;
        let mut bounds = Self {
            price: PriceRange::new(first.price, first.price),
            year: YearRange::new(first.year, first.year),
        };
        for car in &cars[1..] {
            bounds.price.min = bounds.price.min.min(car.price);
            bounds.price.max = bounds.price.max.max(car.price);
            bounds.year.min = bounds.year.min.min(car.year);
            bounds.year.max = bounds.year.max.max(car.year);
        }
        Some(bounds)
    }
}

/// Apply all active criteria to a catalog snapshot
///
/// Filters are pure predicates, so application order does not matter; the
/// result is a stable, order-preserving subset of the input.
pub fn filter_catalog<'a>(cars: &'a [Car], criteria: &Criteria) -> Vec<&'a Car> {
    cars.iter().filter(|car| matches(car, criteria)).collect()
}

fn matches(car: &Car, criteria: &Criteria) -> bool {
    if let Some(search) = criteria.search.as_deref() {
        if !search.is_empty() && !matches_search(car, search) {
            return false;
        }
    }

    if let Some(price) = &criteria.price {
        if !price.contains(car.price) {
            return false;
        }
    }

    if let Some(year) = &criteria.year {
        if !year.contains(car.year) {
            return false;
        }
    }

    if let Some(make) = criteria.make.as_deref() {
        if !make.is_empty() && car.make != make {
            return false;
        }
    }

    true
}

fn matches_search(car: &Car, search: &str) -> bool {
    let search = search.to_lowercase();
    car.make.to_lowercase().contains(&search)
        || car.model.to_lowercase().contains(&search)
        || car.description.to_lowercase().contains(&search)
}

/// Unique makes across a catalog snapshot, in first-seen order
///
/// Feeds the make dropdown in the browsing UI.
pub fn distinct_makes(cars: &[Car]) -> Vec<String> {
    let mut makes: Vec<String> = Vec::new();
    for car in cars {
        if !makes.contains(&car.make) {
            makes.push(car.make.clone());
        }
    }
    makes
}
