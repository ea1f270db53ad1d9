//! Query-driven search over a catalog snapshot.
//!
//! This module provides text normalization, tiered string similarity,
//! weighted relevance ranking and autocomplete suggestions.

// Module declarations
pub(crate) mod normalize;
pub(crate) mod ranking;
pub(crate) mod similarity;
pub(crate) mod suggest;

// Public re-exports (used via lib.rs)
pub use normalize::normalize;
pub use ranking::{ScoredResult, SearchFilters, SearchRequest, SortOrder, rank};
pub use similarity::{Similarity, SimilarityTier, classify, similarity};
pub use suggest::{did_you_mean, suggest};
