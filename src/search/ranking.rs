//! Weighted multi-field relevance ranking.
//!
//! Each item is scored independently against the query, so ranking is a
//! single pass over the catalog followed by a stable sort. Two items keep
//! their relative order no matter what else is in the catalog.

use super::normalize::normalize;
use super::similarity::classify_normalized;
use crate::catalog::{CatalogItem, CategoryResolver};
use crate::config::RelevanceWeights;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A catalog item paired with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
}

/// Candidate restrictions applied before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Only items in this category code (compared after normalization).
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock_only: bool,
    pub on_sale_only: bool,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether an item survives every configured filter.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if let Some(category) = &self.category
            && normalize(category) != normalize(&item.category)
        {
            return false;
        }
        if self.min_price.is_some_and(|min| item.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price > max) {
            return false;
        }
        if self.in_stock_only && !item.in_stock() {
            return false;
        }
        !(self.on_sale_only && !item.flags.on_sale)
    }
}

/// Final ordering of the results that cleared the relevance threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceAscending,
    PriceDescending,
    /// Case-insensitive by display name.
    Name,
}

/// A full search invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    /// Maximum number of results (default: `RelevanceWeights::default_limit`)
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default)]
    pub sort: SortOrder,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// A query normalized once and reused for every item.
#[derive(Debug)]
pub(crate) struct PreparedQuery<'q> {
    normalized: &'q str,
    /// Words long enough to earn per-word bonuses. Repeats are kept: each
    /// occurrence earns its own bonus.
    words: Vec<&'q str>,
}

impl<'q> PreparedQuery<'q> {
    /// `None` when the normalized query is too short to search with.
    pub(crate) fn new(normalized: &'q str, weights: &RelevanceWeights) -> Option<Self> {
        if normalized.len() < weights.min_query_length {
            return None;
        }
        let words = normalized
            .split(' ')
            .filter(|word| word.len() >= weights.min_word_length)
            .collect();
        Some(Self { normalized, words })
    }
}

/// Relevance of a single item. Never negative for validated weights.
pub(crate) fn score_item<R: CategoryResolver + ?Sized>(
    query: &PreparedQuery<'_>,
    item: &CatalogItem,
    categories: &R,
    weights: &RelevanceWeights,
) -> f64 {
    let q = query.normalized;
    let name = normalize(&item.name);
    let category = normalize(&item.category);
    let description = normalize(&item.description);

    let mut score = classify_normalized(&name, q).score * weights.name;
    score += classify_normalized(&category, q).score * weights.category;

    if let Some(display_name) = categories.display_name(&item.category) {
        score += classify_normalized(&normalize(display_name), q).score * weights.category_name;
    }

    score += classify_normalized(&description, q).score * weights.description;

    let matching_tags = item
        .tags
        .iter()
        .filter(|tag| {
            classify_normalized(&normalize(tag), q).score > weights.tag_similarity_threshold
        })
        .count();
    score += matching_tags as f64 * weights.tag;

    for word in &query.words {
        if name.contains(word) {
            score += weights.word_in_name;
        }
        if category.contains(word) {
            score += weights.word_in_category;
        }
        if description.contains(word) {
            score += weights.word_in_description;
        }
    }

    tracing::trace!(id = %item.id, score, "scored item");
    score
}

/// Rank `catalog` against a search request.
///
/// Items failing the request's filters are skipped, the rest are scored, and
/// only scores strictly above `weights.min_score` survive. Results are sorted
/// by descending score with catalog order breaking ties, then re-ordered by
/// the requested [`SortOrder`] and capped to the limit.
pub fn rank<'a, R: CategoryResolver + ?Sized>(
    request: &SearchRequest,
    catalog: &'a [CatalogItem],
    categories: &R,
    weights: &RelevanceWeights,
) -> Vec<ScoredResult<'a>> {
    let start = Instant::now();
    let normalized = normalize(&request.query);
    let Some(query) = PreparedQuery::new(&normalized, weights) else {
        tracing::debug!(query = %request.query, "Query below minimum length, skipping search");
        return Vec::new();
    };
    let limit = request.limit.unwrap_or(weights.default_limit);

    let mut results: Vec<ScoredResult<'a>> = catalog
        .iter()
        .filter(|item| request.filters.matches(item))
        .map(|item| ScoredResult {
            item,
            score: score_item(&query, item, categories, weights),
        })
        .filter(|result| result.score > weights.min_score)
        .collect();

    // Stable: equal scores keep catalog order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    match request.sort {
        SortOrder::Relevance => {}
        SortOrder::PriceAscending => {
            results.sort_by(|a, b| a.item.price.total_cmp(&b.item.price));
        }
        SortOrder::PriceDescending => {
            results.sort_by(|a, b| b.item.price.total_cmp(&a.item.price));
        }
        SortOrder::Name => results.sort_by_cached_key(|r| r.item.name.to_lowercase()),
    }

    let matched = results.len();
    results.truncate(limit);

    tracing::debug!(
        query = %normalized,
        catalog = catalog.len(),
        matched,
        returned = results.len(),
        elapsed = ?start.elapsed(),
        "Ranked catalog"
    );
    results
}
