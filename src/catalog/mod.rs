//! Catalog module - items and the sources that serve them
//!
//! The catalog store itself is an external collaborator. This module
//! defines the data it returns (`CatalogItem` and its enumerations), the
//! query contract the feed depends on (`CatalogSource`), and an in-memory
//! source for local use.

pub mod error;
pub mod memory;
pub mod source;
pub mod types;

pub use error::CatalogError;
pub use memory::MemoryCatalog;
pub use source::CatalogSource;
pub use types::{CatalogItem, Category, ItemId, OwnerType, Size, UnknownValue};
