//! In-memory catalog source
//!
//! Holds a catalog snapshot loaded from JSON and answers queries against it.
//! Used by the CLI and by tests; it stands in for the real catalog store and
//! does no ranking beyond keeping catalog order.

use super::error::CatalogError;
use super::source::CatalogSource;
use super::types::{CatalogItem, Category, ItemId, Size};
use std::fs;
use std::path::Path;

/// Catalog snapshot held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: Vec<CatalogItem>,
}

impl MemoryCatalog {
    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Load a catalog from a JSON array of items
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or is not a valid
    /// catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON array of items
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` on malformed input.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        tracing::debug!(count = items.len(), "loaded catalog");
        Ok(Self::new(items))
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogSource for MemoryCatalog {
    fn feed_items(
        &self,
        category: Option<Category>,
        size: Option<Size>,
        max_price: u32,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.available)
            .filter(|item| category.is_none_or(|c| item.category == Some(c)))
            .filter(|item| size.is_none_or(|s| item.size == Some(s)))
            .filter(|item| item.price_per_day <= max_price)
            .cloned()
            .collect())
    }

    fn search_items(&self, search_term: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let needle = search_term.to_lowercase();

        Ok(self
            .items
            .iter()
            .filter(|item| item.available && matches_term(item, &needle))
            .cloned()
            .collect())
    }

    fn item(&self, id: &ItemId) -> Result<CatalogItem, CatalogError> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

/// Case-insensitive match over the searchable text fields
fn matches_term(item: &CatalogItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item
            .brand
            .as_deref()
            .is_some_and(|brand| brand.to_lowercase().contains(needle))
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OwnerType;
    use crate::testing::sample_catalog;

    #[test]
    fn test_feed_items_unfiltered_skips_unavailable() {
        let catalog = sample_catalog();
        let items = catalog.feed_items(None, None, 2000).unwrap();

        assert!(items.iter().all(|item| item.available));
        assert_eq!(items.len(), catalog.items().iter().filter(|i| i.available).count());
    }

    #[test]
    fn test_feed_items_by_category_and_size() {
        let catalog = sample_catalog();
        let items = catalog
            .feed_items(Some(Category::Dress), Some(Size::M), 2000)
            .unwrap();

        assert!(!items.is_empty());
        for item in &items {
            assert_eq!(item.category, Some(Category::Dress));
            assert_eq!(item.size, Some(Size::M));
        }
    }

    #[test]
    fn test_feed_items_price_cap_is_inclusive() {
        let catalog = MemoryCatalog::new(vec![
            CatalogItem::new("a", "At cap", 500, OwnerType::Store),
            CatalogItem::new("b", "Over cap", 550, OwnerType::Store),
        ]);

        let items = catalog.feed_items(None, None, 500).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::from("a"));
    }

    #[test]
    fn test_search_items_matches_title_brand_and_tags() {
        let catalog = MemoryCatalog::new(vec![
            CatalogItem::new("a", "Floral Maxi Dress", 300, OwnerType::Individual),
            CatalogItem::new("b", "Denim Jacket", 200, OwnerType::Store).with_brand("Levi's"),
            CatalogItem::new("c", "Silk Scarf", 80, OwnerType::Store)
                .with_tags(vec!["floral".into()]),
        ]);

        let floral = catalog.search_items("FLORAL").unwrap();
        let ids: Vec<&str> = floral.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let levis = catalog.search_items("levi").unwrap();
        assert_eq!(levis.len(), 1);
    }

    #[test]
    fn test_item_lookup() {
        let catalog = sample_catalog();
        let first = catalog.items()[0].clone();

        assert_eq!(catalog.item(&first.id).unwrap(), first);
        assert!(matches!(
            catalog.item(&ItemId::from("nope")),
            Err(CatalogError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            MemoryCatalog::from_json("{\"not\": \"a list\"}"),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": "x", "title": "Blazer", "pricePerDay": 250, "ownerType": "user"}]"#,
        )
        .unwrap();

        let catalog = MemoryCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].owner_type, OwnerType::Individual);
    }
}
