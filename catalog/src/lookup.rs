//! Lookups used by the event detail page and the filter panel.

use crate::event::{Event, EventId};
use crate::query::ALL_CATEGORIES;

/// Find an event by id.
#[must_use]
pub fn find_event(events: &[Event], id: EventId) -> Option<&Event> {
    events.iter().find(|event| event.id == id)
}

/// Up to `limit` other events in the same category as `id`, in catalog order.
///
/// Unknown ids have no related events.
#[must_use]
pub fn related_events(events: &[Event], id: EventId, limit: usize) -> Vec<&Event> {
    let Some(target) = find_event(events, id) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| event.category == target.category && event.id != id)
        .take(limit)
        .collect()
}

/// Category chips for the filter panel: `All`, then each category in
/// first-seen order.
#[must_use]
pub fn available_categories(events: &[Event]) -> Vec<&str> {
    let mut categories = vec![ALL_CATEGORIES];
    for event in events {
        if !categories.contains(&event.category.as_str()) {
            categories.push(&event.category);
        }
    }
    categories
}
