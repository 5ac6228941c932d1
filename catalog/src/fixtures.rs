//! Built-in demo events and JSON event loading.

use crate::error::{CatalogError, Result};
use crate::event::Event;
use crate::source::InMemoryCatalog;
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;

/// Parse a JSON array of events.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for malformed JSON or event fields, and
/// [`CatalogError::DuplicateEventId`] if ids repeat. Prices are whole
/// currency units, so fractional or negative prices are rejected.
pub fn parse_events(json: &str) -> Result<InMemoryCatalog> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    InMemoryCatalog::new(events)
}

/// Read and parse a JSON events file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_events`] (including prices that are not whole
/// currency units).
pub fn load_events(path: impl AsRef<Path>) -> Result<InMemoryCatalog> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_events(&json)?;
    tracing::info!(path = %path.display(), events = catalog.len(), "Loaded events file");
    Ok(catalog)
}

/// The demo collection shown when no events file is configured.
#[must_use]
pub fn demo_events() -> Vec<Event> {
    vec![
        Event::new(
            1_u64,
            "Sunburn Arena ft. Local Legends",
            "Music",
            "Mumbai",
            2499,
            at(2026, 11, 14, 18, 0),
        )
        .with_tags(["edm", "live", "festival"])
        .with_attendees(12_400)
        .with_rating(4.7),
        Event::new(
            2_u64,
            "Bengaluru Rust Meetup",
            "Tech",
            "Bengaluru",
            0,
            at(2026, 11, 2, 10, 30),
        )
        .with_tags(["rust", "systems", "networking"])
        .with_attendees(320)
        .with_rating(4.8),
        Event::new(
            3_u64,
            "Street Food Crawl",
            "Food",
            "Delhi",
            499,
            at(2026, 11, 8, 17, 0),
        )
        .with_tags(["street food", "walking tour"])
        .with_attendees(860)
        .with_rating(4.5),
        Event::new(
            4_u64,
            "Modern Miniatures Exhibit",
            "Art",
            "Jaipur",
            0,
            at(2026, 12, 1, 11, 0),
        )
        .with_tags(["painting", "gallery"])
        .with_attendees(1_150)
        .with_rating(4.3),
        Event::new(
            5_u64,
            "City Half Marathon",
            "Sports",
            "Pune",
            1500,
            at(2026, 12, 7, 5, 30),
        )
        .with_tags(["running", "fitness", "outdoor"])
        .with_attendees(5_200)
        .with_rating(4.6),
        Event::new(
            6_u64,
            "Late Night Stand-up",
            "Comedy",
            "Mumbai",
            500,
            at(2026, 11, 21, 21, 0),
        )
        .with_tags(["stand-up", "hindi"])
        .with_attendees(640)
        .with_rating(4.4),
        Event::new(
            7_u64,
            "Pottery for Beginners",
            "Workshop",
            "Goa",
            2000,
            at(2026, 11, 29, 14, 0),
        )
        .with_tags(["ceramics", "hands-on"])
        .with_attendees(45)
        .with_rating(4.9),
        Event::new(
            8_u64,
            "AI Product Summit",
            "Tech",
            "Hyderabad",
            3500,
            at(2027, 1, 16, 9, 0),
        )
        .with_tags(["ai", "startups", "keynote"])
        .with_attendees(2_800)
        .with_rating(4.2),
        Event::new(
            9_u64,
            "Jazz by the Bay",
            "Music",
            "Kochi",
            799,
            at(2026, 12, 19, 19, 30),
        )
        .with_tags(["jazz", "live", "sunset"])
        .with_attendees(900)
        .with_rating(4.6),
        Event::new(
            10_u64,
            "Farmers Market Sunday",
            "Food",
            "Bengaluru",
            0,
            at(2026, 11, 15, 8, 0),
        )
        .with_tags(["organic", "local", "outdoor"])
        .with_attendees(2_100)
        .with_rating(4.1),
        Event::new(
            11_u64,
            "Box Cricket League",
            "Sports",
            "Chennai",
            299,
            at(2026, 12, 13, 16, 0),
        )
        .with_tags(["cricket", "team"])
        .with_attendees(380)
        .with_rating(4.0),
        Event::new(
            12_u64,
            "Watercolour Masterclass",
            "Workshop",
            "Delhi",
            1200,
            at(2027, 1, 9, 10, 0),
        )
        .with_tags(["painting", "hands-on"])
        .with_attendees(60)
        .with_rating(4.8),
    ]
}

/// The demo collection as a catalog.
#[must_use]
pub fn demo_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(demo_events()).unwrap_or_else(|err| {
        tracing::warn!(%err, "Demo events rejected, using an empty catalog");
        InMemoryCatalog::default()
    })
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
