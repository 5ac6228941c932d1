//! Integration tests for loading event collections from JSON files

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use aroundu_catalog::{
    CatalogError, EventCatalog, EventId, PriceBand, QuerySpec, SortKey, available_categories,
    find_event, load_events, query,
};
use std::io::Write;
use std::path::Path;

fn bundled_fixture() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/events.json")
}

#[test]
fn bundled_fixture_loads() {
    let catalog = load_events(bundled_fixture()).unwrap();
    assert_eq!(catalog.len(), 6);

    let yoga = find_event(catalog.events(), EventId::new(106)).unwrap();
    assert_eq!(yoga.price, 500);

    // Missing optional fields fall back to zero
    let street_art = find_event(catalog.events(), EventId::new(104)).unwrap();
    assert!(street_art.rating.abs() < f32::EPSILON);

    assert_eq!(
        available_categories(catalog.events()),
        vec!["All", "Music", "Tech", "Food", "Art", "Sports"]
    );
}

#[test]
fn bundled_fixture_answers_queries() {
    let catalog = load_events(bundled_fixture()).unwrap();

    let free = query(
        catalog.events(),
        &QuerySpec::default().with_price_band(PriceBand::Free),
    );
    let ids: Vec<u64> = free.page_items.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![102, 104]);

    let mid = query(
        catalog.events(),
        &QuerySpec::default()
            .with_price_band(PriceBand::Under2000)
            .with_sort(SortKey::PriceHigh),
    );
    let ids: Vec<u64> = mid.page_items.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![101, 106]);

    // Offset timestamps are normalised to UTC before sorting
    let soonest = query(catalog.events(), &QuerySpec::default());
    assert_eq!(soonest.page_items[0].id.get(), 101);
    assert_eq!(soonest.page_items[2].id.get(), 103);
}

#[test]
fn temp_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 1, "title": "Chai Meetup", "category": "Food",
              "location": "Delhi", "price": 0, "date": "2026-10-30"}}]"#
    )
    .unwrap();

    let catalog = load_events(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.events()[0].is_free());
}

#[test]
fn malformed_json_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{{\"id\": 1, \"title\": ").unwrap();

    let err = load_events(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn bad_date_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 1, "title": "A", "category": "Art", "location": "Goa",
              "price": 0, "date": "next tuesday"}}]"#
    )
    .unwrap();

    assert!(matches!(load_events(file.path()), Err(CatalogError::Json(_))));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_events(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
