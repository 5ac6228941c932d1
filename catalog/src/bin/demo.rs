//! Catalog demo binary
//!
//! Drives a scripted browse session through the store and prints each page.
//! An optional first argument is treated as a shared link query string,
//! e.g. `aroundu-catalog '?category=Music&q=live'`.

use anyhow::Context;
use aroundu_catalog::config::DEFAULT_LOG_FILTER;
use aroundu_catalog::{
    BrowseAction, BrowseEnvironment, BrowseReducer, BrowseState, CatalogConfig, EventCatalog,
    InMemoryCatalog, NavParams, PriceBand, SortKey, available_categories, demo_catalog,
    load_events, related_events,
};
use aroundu_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type BrowseStore = Store<BrowseState, BrowseAction, BrowseEnvironment, BrowseReducer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = CatalogConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate().context("validating configuration")?;
    let page_size = config.page_size()?;

    let catalog: InMemoryCatalog = match &config.events_file {
        Some(path) => {
            load_events(path).with_context(|| format!("loading events from {}", path.display()))?
        },
        None => {
            tracing::info!("CATALOG_EVENTS_FILE not set, using demo events");
            demo_catalog()
        },
    };

    println!("=== AroundU Catalog ===\n");
    println!(
        "{} events | categories: {}",
        catalog.len(),
        available_categories(catalog.events()).join(", ")
    );

    let env = BrowseEnvironment::new(Arc::new(catalog), config.search_debounce());
    let link = std::env::args().nth(1).unwrap_or_default();
    let initial = NavParams::parse(&link)
        .into_state(page_size)
        .refreshed(env.catalog.events());

    let store = Store::new(initial, BrowseReducer::new(), env.clone());
    print_page(&store, "Initial listing").await;

    let sort = BrowseAction::SelectSort {
        sort_key: SortKey::Popular,
    };
    send(&store, sort).await?;
    print_page(&store, "Most popular").await;

    send(&store, BrowseAction::NextPage).await?;
    print_page(&store, "Next page").await;

    let free = BrowseAction::SelectPriceBand {
        price_band: PriceBand::Free,
    };
    send(&store, free).await?;
    print_page(&store, "Free events (back to page 1)").await;

    // Typing: only the last keystroke survives the debounce
    let _ = store
        .send(BrowseAction::SearchInput {
            text: "out".to_string(),
        })
        .await?;
    let mut handle = store
        .send(BrowseAction::SearchInput {
            text: "outdoor".to_string(),
        })
        .await?;
    handle
        .wait_with_timeout(config.search_debounce() + Duration::from_secs(1))
        .await
        .map_err(|()| anyhow::anyhow!("debounced search did not settle"))?;
    print_page(&store, "Typed 'outdoor'").await;

    send(&store, BrowseAction::ResetFilters).await?;
    print_page(&store, "Reset filters (search kept)").await;

    let first = store
        .state(|s| s.results.page_items.first().map(|e| e.id))
        .await;
    if let Some(first) = first {
        let related: Vec<String> = related_events(env.catalog.events(), first, 3)
            .into_iter()
            .map(|event| event.title.clone())
            .collect();
        println!("\nRelated to event {first}: {}", related.join(", "));
    }

    send(&store, BrowseAction::ClearAll).await?;
    print_page(&store, "Clear all").await;

    let link = store.state(BrowseState::to_query_string).await;
    println!("\nShare link: /events?{link}");

    store.shutdown(Duration::from_secs(5)).await?;
    println!("\n=== Session complete ===");
    Ok(())
}

async fn send(store: &BrowseStore, action: BrowseAction) -> anyhow::Result<()> {
    println!("\n>>> Sending: {action:?}");
    store.send(action).await?;
    Ok(())
}

async fn print_page(store: &BrowseStore, title: &str) {
    let view = store.state(Clone::clone).await;
    let control = view.page_control();

    println!("\n--- {title} ---");
    println!(
        "search: {:?} | category: {} | price: {} | sort: {}{}",
        view.search_text,
        view.category,
        view.price_band.label(),
        view.sort_key.label(),
        if view.has_active_filters() { " | filters active" } else { "" },
    );

    if view.results.is_empty() {
        println!("No events found");
        return;
    }

    for event in &view.results.page_items {
        println!(
            "  #{:<3} {:<34} {:<9} {:<10} {:>6} {}",
            event.id,
            event.title,
            event.category,
            event.location,
            if event.is_free() {
                "Free".to_string()
            } else {
                format!("₹{}", event.price)
            },
            event.date.format("%Y-%m-%d"),
        );
    }

    println!(
        "page {}/{} ({} matched){}",
        control.current,
        control.page_count,
        view.results.matched_count,
        if control.is_visible() { "" } else { " | single page" },
    );
}
