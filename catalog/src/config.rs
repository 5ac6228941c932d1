//! Configuration for the catalog binary.
//!
//! Loads settings from environment variables with sensible defaults.

use crate::error::{CatalogError, Result};
use crate::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "aroundu_catalog=debug,aroundu_runtime=info";

/// Default search debounce in milliseconds
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Events per page (`CATALOG_PAGE_SIZE`, default 6)
    pub page_size: usize,
    /// Search debounce in milliseconds (`CATALOG_SEARCH_DEBOUNCE_MS`, default 300)
    pub search_debounce_ms: u64,
    /// JSON events file (`CATALOG_EVENTS_FILE`); demo events when unset
    pub events_file: Option<PathBuf>,
    /// Log filter (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            events_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            page_size: parse_var(&lookup, "CATALOG_PAGE_SIZE")?.unwrap_or(defaults.page_size),
            search_debounce_ms: parse_var(&lookup, "CATALOG_SEARCH_DEBOUNCE_MS")?
                .unwrap_or(defaults.search_debounce_ms),
            events_file: lookup("CATALOG_EVENTS_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    /// Check values that parse but are out of range.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for a zero page size.
    pub fn validate(&self) -> Result<()> {
        self.page_size().map(|_| ())
    }

    /// The page size as a [`NonZeroUsize`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for a zero page size.
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size).ok_or_else(|| CatalogError::Config {
            key: "CATALOG_PAGE_SIZE",
            message: "page size must be at least 1".to_string(),
        })
    }

    /// The search debounce interval
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse().map_err(|err| CatalogError::Config {
                key,
                message: format!("'{raw}': {err}"),
            })
        })
        .transpose()
}
