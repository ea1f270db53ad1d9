//! Catalog search and recommendation engine.
//!
//! Ranks a caller-supplied product catalog against free-text queries,
//! produces autocomplete suggestions, and selects related items for a
//! reference product. The engine is stateless: each call reads the catalog
//! it is given and returns owned or borrowed results, with behavior tuned by
//! an [`EngineConfig`].
//!
//! ```ignore
//! use catalog_search::{CatalogSnapshot, SearchEngine};
//!
//! let snapshot = CatalogSnapshot::from_json(json)?;
//! let engine = SearchEngine::default();
//! for hit in engine.search("polo", &snapshot.items, &snapshot, None) {
//!     println!("{:.2} {}", hit.score, hit.item.name);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod related;
pub mod search;
pub mod tracing;

pub use catalog::{CatalogItem, CatalogSnapshot, Category, CategoryResolver, ItemFlags, NoCategories};
pub use config::{EngineConfig, RelatedConfig, RelevanceWeights, SuggestConfig};
pub use engine::SearchEngine;
pub use error::ConfigError;
pub use related::{RelatedOptions, related_items};
pub use search::{
    ScoredResult, SearchFilters, SearchRequest, Similarity, SimilarityTier, SortOrder, classify,
    did_you_mean, normalize, rank, similarity, suggest,
};
