//! Read-only event sources injected into the browse environment.

use crate::error::{CatalogError, Result};
use crate::event::Event;
use std::collections::HashSet;
use std::sync::Arc;

/// Externally owned, read-only event collection.
///
/// The browse reducer queries whatever this returns on every transition and
/// never writes to it.
pub trait EventCatalog: Send + Sync {
    /// All listed events, in catalog order
    fn events(&self) -> &[Event];
}

/// Event collection held in memory and shared by reference count.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    events: Arc<[Event]>,
}

impl InMemoryCatalog {
    /// Wrap `events`, rejecting duplicate ids
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateEventId`] if two events share an id.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateEventId(event.id));
            }
        }

        Ok(Self {
            events: events.into(),
        })
    }

    /// Number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventCatalog for InMemoryCatalog {
    fn events(&self) -> &[Event] {
        &self.events
    }
}
