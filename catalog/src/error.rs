//! Error types for the catalog crate.
//!
//! The query engine itself is total and never fails. Errors come from the
//! edges: parsing filter names, loading fixtures, and reading configuration.

use crate::event::EventId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the catalog's input boundaries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A price band name that is not one of the known bands
    #[error("unknown price band '{0}' (expected all, free, under500, under2000 or premium)")]
    UnknownPriceBand(String),

    /// A sort key name that is not one of the known keys
    #[error("unknown sort key '{0}' (expected soonest, popular, priceLow, priceHigh or rating)")]
    UnknownSortKey(String),

    /// Invalid configuration value
    #[error("invalid configuration for {key}: {message}")]
    Config {
        /// Environment variable name
        key: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Reading an events file failed
    #[error("failed to read events from {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Events JSON could not be decoded
    #[error("invalid events JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two events in one collection share an id
    #[error("duplicate event id {0}")]
    DuplicateEventId(EventId),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
