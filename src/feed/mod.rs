//! Feed module - filter state, query composition and result tracking
//!
//! This module is UI-agnostic: a frontend edits `FilterCriteria` through a
//! `FeedSession`, runs the tickets it hands out against a `CatalogSource`,
//! and renders `FeedSnapshot`.
//!
//! # Architecture
//!
//! - `filter`: `FilterCriteria` and the price control bounds
//! - `query`: Retrieval mode selection, segmentation, `compose`
//! - `session`: Ticketed queries with stale-result suppression

pub mod filter;
pub mod query;
pub mod session;

pub use filter::{FilterCriteria, FilterCriteriaBuilder, PriceRange};
pub use query::{EMPTY_FEED_HINT, EMPTY_FEED_MESSAGE, FeedQuery, FeedVariant, compose, segment_items};
pub use session::{FeedSession, FeedSnapshot, QueryState, QueryTicket};
