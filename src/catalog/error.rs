//! Catalog-specific error types
//!
//! Errors raised by a catalog source while answering feed or search queries,
//! or while loading catalog snapshots from disk.
//!
//! # Error Types
//!
//! - **`Unavailable`**: The source could not be reached or refused the query
//! - **`IoError`**: Reading a catalog file failed
//! - **`ParseError`**: A catalog file was not valid catalog JSON
//! - **`NotFound`**: A lookup by item id found nothing
//!
//! A failed query is never the same thing as an empty result. Callers keep
//! the error around (see `feed::QueryState::Failed`) instead of rendering
//! "no results".

use thiserror::Error;

/// Catalog source errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not answer the query
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Represents an I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog data could not be decoded
    #[error("Invalid catalog data: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No item exists with the given id
    #[error("Item not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
