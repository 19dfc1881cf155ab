//! Feed filter state
//!
//! `FilterCriteria` is the user's current search box and filter controls.
//! It is plain data: the composer decides what to do with it.

use crate::catalog::{Category, Size};
use serde::{Deserialize, Serialize};

/// Bounds of the max-price control
///
/// The composer never clamps; input surfaces use `clamp` before handing a
/// value to `FilterCriteria`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl PriceRange {
    /// Price slider used by the feed screen (per day)
    pub const FEED: Self = Self {
        min: 50,
        max: 2000,
        step: 50,
    };

    /// Starting max price of a fresh feed screen
    pub const DEFAULT_MAX_PRICE: u32 = 1000;

    /// Clamp into range and snap down to a step boundary
    #[must_use]
    pub const fn clamp(&self, value: u32) -> u32 {
        let value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
        value - (value - self.min) % self.step
    }

    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Current filter and search inputs of a feed screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Category filter (`None` = all categories)
    #[serde(default)]
    pub category: Option<Category>,

    /// Size filter (`None` = all sizes)
    #[serde(default)]
    pub size: Option<Size>,

    /// Maximum price per day
    #[serde(default = "default_max_price")]
    pub max_price: u32,

    /// Free-text search; when non-empty it overrides the structured filters
    #[serde(default)]
    pub search_term: String,
}

const fn default_max_price() -> u32 {
    PriceRange::DEFAULT_MAX_PRICE
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: None,
            size: None,
            max_price: PriceRange::DEFAULT_MAX_PRICE,
            search_term: String::new(),
        }
    }
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new filter criteria builder
    #[must_use]
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// Set the category from raw input; unknown values clear the filter
    pub fn set_category_str(&mut self, value: &str) {
        self.category = Category::parse(value);
    }

    /// Set the size from raw input; unknown values clear the filter
    pub fn set_size_str(&mut self, value: &str) {
        self.size = Size::parse(value);
    }

    /// Whether the search box currently drives retrieval
    #[must_use]
    pub fn has_search_term(&self) -> bool {
        !self.search_term.is_empty()
    }
}

/// Builder for `FilterCriteria`
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    category: Option<Category>,
    size: Option<Size>,
    max_price: Option<u32>,
    search_term: String,
}

impl FilterCriteriaBuilder {
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub const fn max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    #[must_use]
    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn build(self) -> FilterCriteria {
        FilterCriteria {
            category: self.category,
            size: self.size,
            max_price: self.max_price.unwrap_or(PriceRange::DEFAULT_MAX_PRICE),
            search_term: self.search_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.size, None);
        assert_eq!(criteria.max_price, 1000);
        assert!(!criteria.has_search_term());
    }

    #[test]
    fn test_unknown_category_and_size_are_unset() {
        let mut criteria = FilterCriteria::builder()
            .category(Category::Dress)
            .size(Size::M)
            .build();

        criteria.set_category_str("ballgown");
        criteria.set_size_str("XXXL");

        assert_eq!(criteria.category, None);
        assert_eq!(criteria.size, None);
    }

    #[test]
    fn test_set_category_from_input() {
        let mut criteria = FilterCriteria::new();
        criteria.set_category_str("Bottom");
        criteria.set_size_str("l");

        assert_eq!(criteria.category, Some(Category::Bottom));
        assert_eq!(criteria.size, Some(Size::L));
    }

    #[test]
    fn test_whitespace_search_term_counts() {
        let criteria = FilterCriteria::builder().search_term(" ").build();
        assert!(criteria.has_search_term());
    }

    #[test]
    fn test_price_range_clamp() {
        let range = PriceRange::FEED;
        assert_eq!(range.clamp(0), 50);
        assert_eq!(range.clamp(5000), 2000);
        assert_eq!(range.clamp(1000), 1000);
        assert_eq!(range.clamp(1049), 1000);
        assert_eq!(range.clamp(75), 50);
    }

    #[test]
    fn test_price_range_contains() {
        assert!(PriceRange::FEED.contains(50));
        assert!(PriceRange::FEED.contains(2000));
        assert!(!PriceRange::FEED.contains(2050));
        assert!(!PriceRange::FEED.contains(10));
    }

    #[test]
    fn test_criteria_from_toml_uses_defaults() {
        let criteria: FilterCriteria = toml::from_str("category = \"top\"").unwrap();
        assert_eq!(criteria.category, Some(Category::Top));
        assert_eq!(criteria.max_price, 1000);
        assert!(criteria.search_term.is_empty());
    }
}
