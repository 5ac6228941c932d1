//! Event records as listed in the catalog.
//!
//! Events are supplied from outside (fixtures, a JSON file) and treated as
//! immutable by everything in this crate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a listed event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Creates an `EventId` from its raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A listed occurrence with category, price, date, attendee count, and rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,
    /// Display title
    pub title: String,
    /// Category name, matched exactly by the category filter
    pub category: String,
    /// Venue or city
    pub location: String,
    /// Free-form labels, searched by substring
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ticket price in whole currency units; 0 means free
    pub price: u64,
    /// When the event starts
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Utc>,
    /// Number of people registered
    #[serde(default)]
    pub attendees: u32,
    /// Average rating out of 5
    #[serde(default)]
    pub rating: f32,
}

impl Event {
    /// Creates an event with no tags, attendees or rating
    #[must_use]
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        price: u64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            location: location.into(),
            tags: Vec::new(),
            price,
            date,
            attendees: 0,
            rating: 0.0,
        }
    }

    /// Sets the tags
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the attendee count
    #[must_use]
    pub const fn with_attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    /// Sets the rating
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Whether the event costs nothing to attend
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Parse an event date.
///
/// Accepts RFC 3339 timestamps (`2026-03-01T19:00:00Z`) and plain calendar
/// dates (`2026-03-01`, read as midnight UTC).
#[must_use]
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_event_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid event date '{raw}'")))
}
