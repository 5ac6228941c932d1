//! Shared-link parameters for the events listing.
//!
//! Links into the listing carry at most two parameters, `category` and
//! `q`, e.g. `/events?category=Music&q=jazz`. Everything else in the query
//! string is ignored.

use crate::browse::BrowseState;
use crate::query::CategoryFilter;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use url::form_urlencoded;

/// Parameters carried by a link into the events listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavParams {
    /// Category to preselect; `None` means all categories
    pub category: Option<String>,
    /// Search text to prefill
    pub q: Option<String>,
}

impl NavParams {
    /// Parse a form-urlencoded query string, with or without the leading `?`.
    ///
    /// Empty values count as absent. When a key repeats, the last value wins.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = (!value.is_empty()).then(|| value.into_owned());
            match key.as_ref() {
                "category" => params.category = value,
                "q" => params.q = value,
                _ => {},
            }
        }

        params
    }

    /// Capture the shareable parts of a browse state
    #[must_use]
    pub fn from_state(state: &BrowseState) -> Self {
        Self {
            category: (!state.category.is_all()).then(|| state.category.to_string()),
            q: (!state.search_text.is_empty()).then(|| state.search_text.clone()),
        }
    }

    /// Seed a browse state on page 1. Results are empty until the state is
    /// refreshed against a catalog.
    #[must_use]
    pub fn into_state(self, page_size: NonZeroUsize) -> BrowseState {
        let mut state = BrowseState::new(page_size);
        state.category = self.category.map_or(CategoryFilter::All, CategoryFilter::from);
        state.search_text = self.q.unwrap_or_default();
        state
    }

    /// Render as a query string without the leading `?`; empty when there
    /// is nothing to share.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(q) = &self.q {
            serializer.append_pair("q", q);
        }
        serializer.finish()
    }
}

impl BrowseState {
    /// Query string that reopens the listing with this category and search
    #[must_use]
    pub fn to_query_string(&self) -> String {
        NavParams::from_state(self).to_query_string()
    }
}
