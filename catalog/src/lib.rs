//! Event catalog for AroundU.
//!
//! # Overview
//!
//! This crate turns a read-only collection of events into the pages shown
//! on the events listing:
//! - **Query engine**: [`query()`] filters by text, category and price band,
//!   sorts, and slices out one page
//! - **Browse state machine**: [`BrowseReducer`] holds the listing's search,
//!   filter, sort and page selections and keeps results in sync
//! - **Navigation**: [`NavParams`] reads and writes shared links
//! - **Lookups**: event detail and related events
//!
//! # Querying
//!
//! ```ignore
//! use aroundu_catalog::{query, demo_events, PriceBand, QuerySpec, SortKey};
//!
//! let spec = QuerySpec::default()
//!     .with_search("tech")
//!     .with_price_band(PriceBand::Free)
//!     .with_sort(SortKey::Popular);
//!
//! let result = query(&demo_events(), &spec);
//! println!("{} events over {} pages", result.matched_count, result.page_count);
//! ```
//!
//! # Browsing
//!
//! ```ignore
//! use aroundu_runtime::Store;
//!
//! let env = BrowseEnvironment::new(Arc::new(demo_catalog()), config.search_debounce());
//! let initial = NavParams::parse("?category=Music")
//!     .into_state(page_size)
//!     .refreshed(env.catalog.events());
//!
//! let store = Store::new(initial, BrowseReducer::new(), env);
//! store.send(BrowseAction::SelectSort { sort_key: SortKey::Rating }).await?;
//! ```

pub mod browse;
pub mod config;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod lookup;
pub mod navigation;
pub mod pagination;
pub mod query;
pub mod source;

// Re-export main types for convenience
pub use browse::{BrowseAction, BrowseEnvironment, BrowseReducer, BrowseState};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use event::{Event, EventId};
pub use fixtures::{demo_catalog, demo_events, load_events, parse_events};
pub use lookup::{available_categories, find_event, related_events};
pub use navigation::NavParams;
pub use pagination::PageControl;
pub use query::{CategoryFilter, PriceBand, QueryResult, QuerySpec, SortKey, query};
pub use source::{EventCatalog, InMemoryCatalog};
