//! Feed query composition
//!
//! Turns `FilterCriteria` into exactly one catalog query and narrows the
//! result by owner type.
//!
//! # Retrieval modes
//!
//! ```text
//! FilterCriteria
//!     ↓
//! search_term non-empty?
//!     ├─ yes → Search { term }            (category/size/price ignored)
//!     └─ no  → Structured { category, size, max_price }
//!         ↓
//! CatalogSource
//!     ↓
//! segment (owner type), both modes
//! ```
//!
//! Search supersedes structured filtering entirely. Segmentation still
//! applies after a search, so a segmented search can return fewer items
//! than the search itself matched.

use crate::catalog::{CatalogError, CatalogItem, CatalogSource, Category, OwnerType, Size};
use crate::feed::filter::FilterCriteria;
use serde::{Deserialize, Serialize};

/// The single query issued for one recomposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedQuery {
    /// Free-text search with only the term
    Search { term: String },
    /// Structured filter query
    Structured {
        category: Option<Category>,
        size: Option<Size>,
        max_price: u32,
    },
}

impl FeedQuery {
    /// Pick the retrieval mode for the given criteria
    #[must_use]
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        if criteria.has_search_term() {
            Self::Search {
                term: criteria.search_term.clone(),
            }
        } else {
            Self::Structured {
                category: criteria.category,
                size: criteria.size,
                max_price: criteria.max_price,
            }
        }
    }

    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search { .. })
    }

    /// Run this query against a source
    ///
    /// # Errors
    ///
    /// Returns the source's `CatalogError` unchanged.
    pub fn execute<S: CatalogSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        match self {
            Self::Search { term } => source.search_items(term),
            Self::Structured {
                category,
                size,
                max_price,
            } => source.feed_items(*category, *size, *max_price),
        }
    }
}

/// Which slice of the catalog a feed screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedVariant {
    /// Everything
    #[default]
    All,
    /// Peer-to-peer listings
    Peer,
    /// Store listings
    Store,
}

impl FeedVariant {
    /// Owner type kept by this variant's segmentation pass
    #[must_use]
    pub const fn segment(self) -> Option<OwnerType> {
        match self {
            Self::All => None,
            Self::Peer => Some(OwnerType::Individual),
            Self::Store => Some(OwnerType::Store),
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::All => "Trending Now ✨",
            Self::Peer => "P2P Marketplace 👥",
            Self::Store => "Rentz Store 🏪",
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::All => "Discover your next perfect outfit",
            Self::Peer => "Rent from other users",
            Self::Store => "Curated collection from Rentz",
        }
    }
}

/// Message shown for an empty (but successful) feed
pub const EMPTY_FEED_MESSAGE: &str = "No outfits found matching your criteria";

/// Hint shown under `EMPTY_FEED_MESSAGE`
pub const EMPTY_FEED_HINT: &str = "Try adjusting your filters";

/// Keep only items owned by `segment`; `None` keeps everything
///
/// Order is preserved and applying it twice changes nothing.
#[must_use]
pub fn segment_items(items: Vec<CatalogItem>, segment: Option<OwnerType>) -> Vec<CatalogItem> {
    match segment {
        None => items,
        Some(owner) => items
            .into_iter()
            .filter(|item| item.owner_type == owner)
            .collect(),
    }
}

/// Compose and run the feed query for the given inputs
///
/// # Errors
///
/// Returns `CatalogError` if the source fails; an empty list is a valid
/// result, not an error.
pub fn compose<S: CatalogSource + ?Sized>(
    source: &S,
    criteria: &FilterCriteria,
    segment: Option<OwnerType>,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let query = FeedQuery::from_criteria(criteria);
    tracing::debug!(?query, ?segment, "composing feed query");

    let items = query.execute(source)?;
    Ok(segment_items(items, segment))
}
