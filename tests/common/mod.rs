//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `snapshot`: the apparel catalog in `tests/fixtures/catalog.json`
//! - `engine`: a [`SearchEngine`] with the default configuration
//!
//! Both install the tracing subscriber so `RUST_LOG=catalog_search=trace`
//! shows per-item scores when a test fails.

use catalog_search::{CatalogItem, CatalogSnapshot, SearchEngine, ScoredResult};
use rstest::fixture;

const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

/// The shared apparel catalog.
#[fixture]
pub fn snapshot() -> CatalogSnapshot {
    catalog_search::tracing::init();
    CatalogSnapshot::from_json(CATALOG_JSON).expect("fixture catalog should parse")
}

/// An engine with default weights and limits.
#[allow(dead_code)] // Used across different integration test crates
#[fixture]
pub fn engine() -> SearchEngine {
    catalog_search::tracing::init();
    SearchEngine::default()
}

/// Ids of ranked results, in order.
#[allow(dead_code)] // Used across different integration test crates
pub fn result_ids<'a>(results: &[ScoredResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.id.as_str()).collect()
}

/// Ids of plain items, in order.
#[allow(dead_code)] // Used across different integration test crates
pub fn item_ids<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

/// Look up a fixture item that must exist.
#[allow(dead_code)] // Used across different integration test crates
pub fn item<'a>(snapshot: &'a CatalogSnapshot, id: &str) -> &'a CatalogItem {
    snapshot
        .item(id)
        .unwrap_or_else(|| panic!("fixture item '{id}' missing"))
}
