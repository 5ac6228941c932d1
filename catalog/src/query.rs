//! The catalog query engine.
//!
//! [`query`] filters, sorts and paginates an event collection in one pure
//! call. It never mutates its input, keeps no state between calls, and
//! treats an empty result as a normal outcome.
//!
//! Stages run in a fixed order:
//!
//! 1. Text search (case-insensitive substring over title, location, category, tags)
//! 2. Category (exact match unless [`CategoryFilter::All`])
//! 3. Price band
//! 4. Stable sort by [`SortKey`]
//! 5. Page slice

use crate::error::CatalogError;
use crate::event::Event;
use crate::pagination;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Page size used by the events listing.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// Name of the category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Category selection: everything, or one exact category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category filtering
    #[default]
    All,
    /// Only events whose category equals this name (case-sensitive)
    Only(String),
}

impl CategoryFilter {
    /// Whether an event with `category` passes this filter
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == category,
        }
    }

    /// The name shown on the filter chip
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }

    /// Whether this is the "All" sentinel
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(name: String) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price filter bands.
///
/// `Free`, `Under500`, `Under2000` and `Premium` partition all prices; the
/// boundary prices 500 and 2000 both belong to `Under2000`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceBand {
    /// No price filtering
    #[default]
    All,
    /// Price is exactly 0
    Free,
    /// 0 < price < 500
    Under500,
    /// 500 <= price <= 2000
    Under2000,
    /// price > 2000
    Premium,
}

impl PriceBand {
    /// Every band, in filter panel order
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Free,
        Self::Under500,
        Self::Under2000,
        Self::Premium,
    ];

    /// Whether `price` falls inside this band
    #[must_use]
    pub const fn contains(self, price: u64) -> bool {
        match self {
            Self::All => true,
            Self::Free => price == 0,
            Self::Under500 => price > 0 && price < 500,
            Self::Under2000 => price >= 500 && price <= 2000,
            Self::Premium => price > 2000,
        }
    }

    /// Wire name, as used in links and settings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Free => "free",
            Self::Under500 => "under500",
            Self::Under2000 => "under2000",
            Self::Premium => "premium",
        }
    }

    /// Filter panel label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All prices",
            Self::Free => "Free",
            Self::Under500 => "Under ₹500",
            Self::Under2000 => "₹500 – ₹2,000",
            Self::Premium => "₹2,000+",
        }
    }
}

impl FromStr for PriceBand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPriceBand(s.to_string()))
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Earliest date first
    #[default]
    Soonest,
    /// Most attendees first
    Popular,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Highest rating first
    Rating,
}

impl SortKey {
    /// Every sort key, in sort menu order
    pub const ALL: [Self; 5] = [
        Self::Soonest,
        Self::Popular,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
    ];

    /// Wire name, as used in links and settings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Soonest => "soonest",
            Self::Popular => "popular",
            Self::PriceLow => "priceLow",
            Self::PriceHigh => "priceHigh",
            Self::Rating => "rating",
        }
    }

    /// Sort menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Soonest => "Soonest First",
            Self::Popular => "Most Popular",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Top Rated",
        }
    }

    /// Compare two events under this key
    #[must_use]
    pub fn compare(self, a: &Event, b: &Event) -> Ordering {
        match self {
            Self::Soonest => a.date.cmp(&b.date),
            Self::Popular => b.attendees.cmp(&a.attendees),
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of filter, sort and page parameters for one catalog request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Free text; empty means no text filter
    pub search_text: String,
    /// Category selection
    pub category: CategoryFilter,
    /// Price band selection
    pub price_band: PriceBand,
    /// Result ordering
    pub sort_key: SortKey,
    /// 1-based page index
    pub page: usize,
    /// Events per page
    pub page_size: NonZeroUsize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            price_band: PriceBand::All,
            sort_key: SortKey::Soonest,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    /// Sets the search text
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets the category filter
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the price band
    #[must_use]
    pub const fn with_price_band(mut self, price_band: PriceBand) -> Self {
        self.price_band = price_band;
        self
    }

    /// Sets the sort key
    #[must_use]
    pub const fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Sets the page
    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Whether `event` passes the text, category and price filters
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        let needle = self.search_text.to_lowercase();
        matches_text(event, &needle)
            && self.category.matches(&event.category)
            && self.price_band.contains(event.price)
    }
}

/// One page of matching events plus pagination metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Events matching all filters, before pagination
    pub matched_count: usize,
    /// The requested page, in sort order
    pub page_items: Vec<Event>,
    /// `ceil(matched_count / page_size)`; 0 when nothing matched
    pub page_count: usize,
}

impl QueryResult {
    /// Whether nothing matched (the "no events found" state)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.matched_count == 0
    }
}

/// Run a catalog query.
///
/// Filters, stably sorts and slices `events` according to `spec`. Pages
/// past the end (and page 0) come back empty rather than failing; keeping
/// the page in range is the caller's job.
#[must_use]
pub fn query(events: &[Event], spec: &QuerySpec) -> QueryResult {
    let needle = spec.search_text.to_lowercase();

    let mut matched: Vec<&Event> = events
        .iter()
        .filter(|event| matches_text(event, &needle))
        .filter(|event| spec.category.matches(&event.category))
        .filter(|event| spec.price_band.contains(event.price))
        .collect();

    // `sort_by` is stable: equal keys keep catalog order.
    matched.sort_by(|a, b| spec.sort_key.compare(a, b));

    let matched_count = matched.len();
    let page_count = pagination::page_count(matched_count, spec.page_size);
    let bounds = pagination::page_bounds(spec.page, spec.page_size, matched_count);
    let page_items: Vec<Event> = matched[bounds].iter().map(|&event| event.clone()).collect();

    tracing::debug!(
        search = %spec.search_text,
        category = %spec.category,
        price_band = %spec.price_band,
        sort_key = %spec.sort_key,
        page = spec.page,
        matched_count,
        page_count,
        "catalog query"
    );

    QueryResult {
        matched_count,
        page_items,
        page_count,
    }
}

/// Case-insensitive substring match; `needle` must already be lower-cased.
fn matches_text(event: &Event, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    event.title.to_lowercase().contains(needle)
        || event.location.to_lowercase().contains(needle)
        || event.category.to_lowercase().contains(needle)
        || event
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
