//! Rentz - feed composition and navigation for a fashion rental catalog
//!
//! This library holds the client-side orchestration of the rental app:
//! turning filter and search inputs into catalog queries, narrowing results
//! by owner type, and moving between screens while carrying the selected
//! item along.

use thiserror::Error;

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod feed;
pub mod nav;
pub mod output;

#[cfg(test)]
pub mod testing;

pub use app::AppSession;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RentzError {
    /// Catalog source error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Represents a JSON serialization error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// The feed query failed; the feed shows an error state
    #[error("Feed unavailable: {0}")]
    FeedError(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_conversion() {
        let error: RentzError = catalog::CatalogError::NotFound("o1".into()).into();
        assert_eq!(error.to_string(), "Catalog error: Item not found: o1");
    }

    #[test]
    fn test_invalid_input_display() {
        let error = RentzError::InvalidInput("rentNow is not accepted in feed".into());
        assert_eq!(
            error.to_string(),
            "Invalid input: rentNow is not accepted in feed"
        );
    }

    #[test]
    fn test_feed_error_display() {
        let error = RentzError::FeedError("Catalog unavailable: timeout".into());
        assert_eq!(
            error.to_string(),
            "Feed unavailable: Catalog unavailable: timeout"
        );
    }
}
