//! Catalog source abstraction
//!
//! The catalog data store lives outside this crate. Feed composition needs
//! the two list queries below; the detail screen needs a lookup by id.

use super::error::CatalogError;
use super::types::{CatalogItem, Category, ItemId, Size};

/// Answers structured filter queries and free-text searches
///
/// Implementations decide ranking for `search_items`; callers keep the order
/// they receive. Neither method is retried by the feed layer.
pub trait CatalogSource: Send + Sync {
    /// Structured filter query
    ///
    /// `category` and `size` are `None` when unset and then match every item.
    /// `max_price` is always given.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot answer the query.
    fn feed_items(
        &self,
        category: Option<Category>,
        size: Option<Size>,
        max_price: u32,
    ) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Free-text search query
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot answer the query.
    fn search_items(&self, search_term: &str) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Look up a single item by id
    ///
    /// Used by the item detail screen.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no item has this id.
    fn item(&self, id: &ItemId) -> Result<CatalogItem, CatalogError>;
}
