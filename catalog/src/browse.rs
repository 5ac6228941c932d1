//! Browse state machine for the events listing.
//!
//! The listing page owns search text, filter selections, sort and the
//! current page. Those live in [`BrowseState`] and change only through
//! [`BrowseReducer`]:
//!
//! - changing search text, category, price band or sort resets the page to 1
//! - changing the page never touches the filters
//! - page requests are clamped to the pages that exist
//!
//! Typed search input is debounced: each keystroke schedules a
//! [`BrowseAction::SearchSettled`] tagged with a generation number, and
//! only the settle carrying the latest generation is applied.

use crate::event::Event;
use crate::pagination::{PageControl, clamp_page};
use crate::query::{
    CategoryFilter, DEFAULT_PAGE_SIZE, PriceBand, QueryResult, QuerySpec, SortKey, query,
};
use crate::source::EventCatalog;
use aroundu_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// State of the events listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrowseState {
    /// Applied search text
    pub search_text: String,
    /// Selected category
    pub category: CategoryFilter,
    /// Selected price band
    pub price_band: PriceBand,
    /// Selected ordering
    pub sort_key: SortKey,
    /// Current page (1-based)
    pub page: usize,
    /// Events per page
    pub page_size: NonZeroUsize,
    /// Typed text waiting for the debounce to settle
    pub pending_search: Option<String>,
    /// Bumped on every search change; stale settles are ignored
    pub search_generation: u64,
    /// Current page of results for the selections above
    pub results: QueryResult,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BrowseState {
    /// Fresh state with no search, no filters and an empty result
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            price_band: PriceBand::All,
            sort_key: SortKey::Soonest,
            page: 1,
            page_size,
            pending_search: None,
            search_generation: 0,
            results: QueryResult::default(),
        }
    }

    /// The query these selections describe
    #[must_use]
    pub fn spec(&self) -> QuerySpec {
        QuerySpec {
            search_text: self.search_text.clone(),
            category: self.category.clone(),
            price_band: self.price_band,
            sort_key: self.sort_key,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Recompute `results` from `events`
    pub fn refresh(&mut self, events: &[Event]) {
        self.results = query(events, &self.spec());
    }

    /// Builder form of [`BrowseState::refresh`]
    #[must_use]
    pub fn refreshed(mut self, events: &[Event]) -> Self {
        self.refresh(events);
        self
    }

    /// Whether a category or price filter is applied (the filter badge)
    #[must_use]
    pub const fn has_active_filters(&self) -> bool {
        !self.category.is_all() || !matches!(self.price_band, PriceBand::All)
    }

    /// Model for the page-index control
    #[must_use]
    pub fn page_control(&self) -> PageControl {
        PageControl::new(self.page, self.results.page_count)
    }

    fn reset_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.price_band = PriceBand::All;
        self.sort_key = SortKey::Soonest;
    }

    /// Apply `text` as the search; returns whether it differs from the
    /// previous search. Pending input is cancelled either way.
    fn apply_search(&mut self, text: String) -> bool {
        self.search_generation = self.search_generation.wrapping_add(1);
        self.pending_search = None;
        let changed = text != self.search_text;
        self.search_text = text;
        changed
    }
}

/// Inputs to the events listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseAction {
    /// Search submitted; applied immediately
    SubmitSearch {
        /// Search text
        text: String,
    },
    /// Search box edited; applied after the debounce interval
    SearchInput {
        /// Current contents of the search box
        text: String,
    },
    /// Debounce interval elapsed for the input tagged `generation`
    SearchSettled {
        /// Generation the input was tagged with
        generation: u64,
        /// Text typed at that generation
        text: String,
    },
    /// Category chip clicked
    SelectCategory {
        /// Selected category
        category: CategoryFilter,
    },
    /// Price option chosen
    SelectPriceBand {
        /// Selected band
        price_band: PriceBand,
    },
    /// Sort option chosen
    SelectSort {
        /// Selected ordering
        sort_key: SortKey,
    },
    /// Page number clicked
    GoToPage {
        /// Requested page (clamped)
        page: usize,
    },
    /// "Next" clicked
    NextPage,
    /// "Prev" clicked
    PrevPage,
    /// "Reset Filters": category, price and sort back to defaults
    ResetFilters,
    /// "Clear all filters": search text too
    ClearAll,
}

/// Dependencies of the browse reducer.
#[derive(Clone)]
pub struct BrowseEnvironment {
    /// Read-only event collection
    pub catalog: Arc<dyn EventCatalog>,
    /// How long typed input must stay unchanged before it is applied
    pub search_debounce: Duration,
}

impl BrowseEnvironment {
    /// Creates a new `BrowseEnvironment`
    #[must_use]
    pub fn new(catalog: Arc<dyn EventCatalog>, search_debounce: Duration) -> Self {
        Self {
            catalog,
            search_debounce,
        }
    }
}

/// Reducer for the events listing
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowseReducer;

impl BrowseReducer {
    /// Creates a new `BrowseReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Action = BrowseAction;
    type Environment = BrowseEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(?action, page = state.page, "browse action");

        let filters_changed = match action {
            BrowseAction::SubmitSearch { text } => state.apply_search(text),
            BrowseAction::SearchInput { text } => {
                state.search_generation = state.search_generation.wrapping_add(1);
                state.pending_search = Some(text.clone());
                let settle = BrowseAction::SearchSettled {
                    generation: state.search_generation,
                    text,
                };
                return smallvec![Effect::delay(env.search_debounce, settle)];
            },
            BrowseAction::SearchSettled { generation, text } => {
                if generation != state.search_generation {
                    tracing::trace!(
                        generation,
                        current = state.search_generation,
                        "Dropping stale search input"
                    );
                    return smallvec![Effect::None];
                }
                state.apply_search(text)
            },
            BrowseAction::SelectCategory { category } => {
                state.category = category;
                true
            },
            BrowseAction::SelectPriceBand { price_band } => {
                state.price_band = price_band;
                true
            },
            BrowseAction::SelectSort { sort_key } => {
                state.sort_key = sort_key;
                true
            },
            BrowseAction::GoToPage { page } => {
                state.page = clamp_page(page, state.results.page_count);
                false
            },
            BrowseAction::NextPage => {
                state.page = state.page_control().next();
                false
            },
            BrowseAction::PrevPage => {
                state.page = state.page_control().prev();
                false
            },
            BrowseAction::ResetFilters => {
                state.reset_filters();
                true
            },
            BrowseAction::ClearAll => {
                let _ = state.apply_search(String::new());
                state.reset_filters();
                true
            },
        };

        if filters_changed {
            state.page = 1;
        }
        state.refresh(env.catalog.events());

        tracing::debug!(
            page = state.page,
            matched = state.results.matched_count,
            pages = state.results.page_count,
            "browse state updated"
        );

        smallvec![Effect::None]
    }
}
