//! Testing utilities for rentz
//!
//! Fixture catalogs and catalog sources with scripted behaviour.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{
    CatalogError, CatalogItem, CatalogSource, Category, ItemId, MemoryCatalog, OwnerType, Size,
};
use std::sync::Mutex;

/// A small mixed catalog
///
/// - 8 items, 7 available (`o8` is rented out)
/// - 4 peer listings, 4 store listings
/// - searching "dress" matches `o1`, `o2` (description) and `o6`
#[must_use]
pub fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::new(vec![
        CatalogItem::new("o1", "Floral Maxi Dress", 450, OwnerType::Individual)
            .with_category(Category::Dress)
            .with_size(Size::M)
            .with_owner_name("Priya Sharma")
            .with_tags(vec!["floral".into(), "summer".into()]),
        CatalogItem::new("o2", "Red Carpet Gown", 1800, OwnerType::Store)
            .with_category(Category::Dress)
            .with_size(Size::S)
            .with_brand("Rentz Atelier")
            .with_description("Floor-length sequin evening dress"),
        CatalogItem::new("o3", "Linen Crop Top", 150, OwnerType::Individual)
            .with_category(Category::Top)
            .with_size(Size::S),
        CatalogItem::new("o4", "Wide-Leg Trousers", 220, OwnerType::Store)
            .with_category(Category::Bottom)
            .with_size(Size::L),
        CatalogItem::new("o5", "Pearl Statement Necklace", 90, OwnerType::Store)
            .with_category(Category::Accessories),
        CatalogItem::new("o6", "Little Black Dress", 600, OwnerType::Store)
            .with_category(Category::Dress)
            .with_size(Size::M)
            .with_brand("Mango"),
        CatalogItem::new("o7", "Denim Mini Skirt", 120, OwnerType::Individual)
            .with_category(Category::Bottom)
            .with_size(Size::Xs),
        CatalogItem::new("o8", "Velvet Slip Dress", 380, OwnerType::Individual)
            .with_category(Category::Dress)
            .with_size(Size::M)
            .unavailable(),
    ])
}

/// Source that fails every query
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCatalog;

impl CatalogSource for FailingCatalog {
    fn feed_items(
        &self,
        _category: Option<Category>,
        _size: Option<Size>,
        _max_price: u32,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        Err(CatalogError::Unavailable("catalog offline".to_string()))
    }

    fn search_items(&self, _search_term: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Err(CatalogError::Unavailable("catalog offline".to_string()))
    }

    fn item(&self, id: &ItemId) -> Result<CatalogItem, CatalogError> {
        Err(CatalogError::Unavailable(format!("catalog offline ({id})")))
    }
}

/// A query seen by `RecordingCatalog`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Feed {
        category: Option<Category>,
        size: Option<Size>,
        max_price: u32,
    },
    Search(String),
    Item(ItemId),
}

/// Wraps a source and records every query it receives
#[derive(Debug)]
pub struct RecordingCatalog<S> {
    inner: S,
    calls: Mutex<Vec<RecordedCall>>,
}

impl<S: CatalogSource> RecordingCatalog<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, oldest first
    ///
    /// # Panics
    /// Panics if the call log mutex is poisoned.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("call log poisoned").push(call);
    }
}

impl<S: CatalogSource> CatalogSource for RecordingCatalog<S> {
    fn feed_items(
        &self,
        category: Option<Category>,
        size: Option<Size>,
        max_price: u32,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        self.record(RecordedCall::Feed {
            category,
            size,
            max_price,
        });
        self.inner.feed_items(category, size, max_price)
    }

    fn search_items(&self, search_term: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        self.record(RecordedCall::Search(search_term.to_string()));
        self.inner.search_items(search_term)
    }

    fn item(&self, id: &ItemId) -> Result<CatalogItem, CatalogError> {
        self.record(RecordedCall::Item(id.clone()));
        self.inner.item(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        let items = catalog.items();

        assert_eq!(items.len(), 8);
        assert_eq!(items.iter().filter(|i| i.available).count(), 7);
        assert_eq!(
            items.iter().filter(|i| i.owner_type == OwnerType::Store).count(),
            4
        );
    }

    #[test]
    fn test_recording_catalog_records_in_order() {
        let source = RecordingCatalog::new(sample_catalog());
        source.feed_items(Some(Category::Top), None, 500).unwrap();
        source.search_items("gown").unwrap();

        assert_eq!(
            source.calls(),
            vec![
                RecordedCall::Feed {
                    category: Some(Category::Top),
                    size: None,
                    max_price: 500,
                },
                RecordedCall::Search("gown".into()),
            ]
        );
    }
}
