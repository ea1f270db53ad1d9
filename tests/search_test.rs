mod common;

use assert2::check;
use catalog_search::{
    CatalogItem, CatalogSnapshot, NoCategories, SearchEngine, SearchFilters, SearchRequest,
    SortOrder,
};
use common::{engine, result_ids, snapshot};
use rstest::rstest;

// --- Query screening ---

#[rstest]
#[case("")]
#[case("a")]
#[case("   ")]
#[case("!?")]
#[case(" b. ")]
fn short_queries_return_nothing(
    engine: SearchEngine,
    snapshot: CatalogSnapshot,
    #[case] query: &str,
) {
    check!(engine.search(query, &snapshot.items, &snapshot, None).is_empty());
}

#[rstest]
fn unknown_query_returns_nothing(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let results = engine.search("xyz-nonexistent-query-987", &snapshot.items, &snapshot, None);
    check!(results.is_empty());
}

#[rstest]
fn empty_catalog_returns_nothing(engine: SearchEngine) {
    check!(engine.search("polo", &[], &NoCategories, None).is_empty());
}

// --- Ranking ---

/// The three-item scenario: both "organic" items outrank the polo, in catalog order.
#[rstest]
fn organic_scenario_keeps_catalog_order(engine: SearchEngine) {
    let catalog = vec![
        CatalogItem::new("tee", "Organic Cotton Classic Tee", "t-shirts", 25.0),
        CatalogItem::new("polo", "Premium Polo Shirt", "polo-shirts", 45.0),
        CatalogItem::new("hoodie", "Cozy Organic Hoodie", "hoodies", 65.0),
    ];
    let results = engine.search("organic", &catalog, &NoCategories, None);
    let ids = result_ids(&results);
    check!(&ids[..2] == ["tee", "hoodie"]);
    check!(results[0].score == results[1].score);
    if let Some(polo) = ids.iter().position(|id| *id == "polo") {
        check!(polo >= 2);
    }
}

#[rstest]
fn organic_items_lead_the_fixture_catalog(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let results = engine.search("organic", &snapshot.items, &snapshot, None);
    let ids = result_ids(&results);
    check!(ids.len() >= 2);
    let mut top = ids[..2].to_vec();
    top.sort_unstable();
    check!(top == ["hoodie-organic", "tee-organic"]);
    check!(results[1].score > results[2].score);
}

#[rstest]
fn polo_ranks_above_unrelated_hoodie(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let results = engine.search("polo", &snapshot.items, &snapshot, None);
    let ids = result_ids(&results);
    check!(ids == ["polo-premium", "polo-pique"]);
    check!(!ids.contains(&"hoodie-organic"));
}

#[rstest]
fn tied_scores_follow_catalog_order(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let results = engine.search("tee", &snapshot.items, &snapshot, None);
    check!(result_ids(&results) == ["tee-organic", "tee-vneck", "tee-pocket", "tee-longsleeve"]);
    check!(results.windows(2).all(|pair| pair[0].score == pair[1].score));
}

#[rstest]
fn tags_surface_items_without_name_matches(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let results = engine.search("winter", &snapshot.items, &snapshot, None);
    check!(&result_ids(&results)[..2] == ["hoodie-organic", "sweat-heavy"]);
    check!(results[0].score == 3.0);
}

#[rstest]
fn scores_are_sorted_and_above_threshold(engine: SearchEngine, snapshot: CatalogSnapshot) {
    for query in ["polo shirt", "shirts", "sweat", "cotton", "heavyweight"] {
        let results = engine.search(query, &snapshot.items, &snapshot, None);
        check!(!results.is_empty(), "query {query:?} should match");
        check!(results.iter().all(|r| r.score > 1.0));
        check!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }
}

#[rstest]
fn growing_the_catalog_keeps_relative_order(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let before = engine.search("shirts", &snapshot.items, &snapshot, None);
    let before_ids = result_ids(&before);

    let mut larger = snapshot.items.clone();
    larger.insert(3, CatalogItem::new("new-1", "Oxford Shirt", "shirts", 60.0));
    larger.push(CatalogItem::new("new-2", "Flannel Shirt", "shirts", 58.0));
    let after = engine.search("shirts", &larger, &snapshot, Some(50));
    let after_ids: Vec<&str> = result_ids(&after)
        .into_iter()
        .filter(|id| before_ids.contains(id))
        .collect();

    check!(after_ids == before_ids);
}

#[rstest]
#[case(1)]
#[case(3)]
fn limit_caps_results(engine: SearchEngine, snapshot: CatalogSnapshot, #[case] limit: usize) {
    let results = engine.search("shirts", &snapshot.items, &snapshot, Some(limit));
    check!(results.len() == limit);
}

#[rstest]
fn zero_limit_returns_nothing(engine: SearchEngine, snapshot: CatalogSnapshot) {
    check!(engine.search("shirts", &snapshot.items, &snapshot, Some(0)).is_empty());
}

// --- Requests with filters and sorting ---

#[rstest]
fn filters_apply_before_ranking(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let request = SearchRequest::new("tee").with_filters(SearchFilters {
        on_sale_only: true,
        ..SearchFilters::default()
    });
    let results = engine.search_with(&request, &snapshot.items, &snapshot);
    check!(result_ids(&results) == ["tee-pocket"]);
}

#[rstest]
fn stock_filter_drops_sold_out_items(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let request = SearchRequest::new("organic").with_filters(SearchFilters {
        in_stock_only: true,
        ..SearchFilters::default()
    });
    let results = engine.search_with(&request, &snapshot.items, &snapshot);
    check!(!result_ids(&results).contains(&"hoodie-organic"));
    check!(result_ids(&results)[0] == "tee-organic");
}

#[rstest]
fn price_sort_reorders_matches(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let request = SearchRequest::new("tee").with_sort(SortOrder::PriceAscending);
    let results = engine.search_with(&request, &snapshot.items, &snapshot);
    check!(result_ids(&results) == ["tee-vneck", "tee-organic", "tee-pocket", "tee-longsleeve"]);
}

#[rstest]
fn request_from_json(engine: SearchEngine, snapshot: CatalogSnapshot) {
    let request: SearchRequest = serde_json::from_str(
        r#"{
            "query": "polo",
            "limit": 1,
            "filters": { "maxPrice": 40.0 },
            "sort": "relevance"
        }"#,
    )
    .expect("request should parse");
    let results = engine.search_with(&request, &snapshot.items, &snapshot);
    check!(result_ids(&results) == ["polo-pique"]);
}
