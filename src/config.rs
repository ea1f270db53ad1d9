//! Engine configuration: field weights, thresholds, default limits and the
//! promoted search terms.
//!
//! Every field has a default, so an empty TOML document yields the standard
//! configuration:
//!
//! ```toml
//! popular_terms = ["organic cotton", "hoodies"]
//!
//! [relevance]
//! name = 10.0
//! min_score = 1.0
//!
//! [related]
//! default_price_range_percent = 25.0
//! ```

use crate::error::ConfigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weights and thresholds for query relevance scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceWeights {
    /// Multiplier for name similarity.
    pub name: f64,
    /// Multiplier for category code similarity.
    pub category: f64,
    /// Multiplier for category display name similarity.
    pub category_name: f64,
    /// Multiplier for description similarity.
    pub description: f64,
    /// Bonus per tag whose similarity to the query clears `tag_similarity_threshold`.
    pub tag: f64,
    pub tag_similarity_threshold: f64,
    /// Bonus per query word found in the normalized name.
    pub word_in_name: f64,
    /// Bonus per query word found in the normalized category code.
    pub word_in_category: f64,
    /// Bonus per query word found in the normalized description.
    pub word_in_description: f64,
    /// Query words shorter than this earn no per-word bonus.
    pub min_word_length: usize,
    /// Items must score strictly above this to be returned.
    pub min_score: f64,
    /// Normalized queries shorter than this return nothing.
    pub min_query_length: usize,
    pub default_limit: usize,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            name: 10.0,
            category: 8.0,
            category_name: 8.0,
            description: 5.0,
            tag: 3.0,
            tag_similarity_threshold: 0.5,
            word_in_name: 2.0,
            word_in_category: 2.0,
            word_in_description: 1.0,
            min_word_length: 3,
            min_score: 1.0,
            min_query_length: 2,
            default_limit: 20,
        }
    }
}

/// Autocomplete and did-you-mean settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub default_limit: usize,
    /// Minimum Jaro-Winkler similarity for a spelling correction.
    pub did_you_mean_threshold: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            default_limit: 5,
            did_you_mean_threshold: 0.85,
        }
    }
}

/// Weights for related-item selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    /// Score for sharing the reference item's category.
    pub same_category_weight: f64,
    /// Score for an identical price; decays as the price difference grows.
    pub price_weight: f64,
    pub default_limit: usize,
    pub default_price_range_percent: f64,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            same_category_weight: 10.0,
            price_weight: 5.0,
            default_limit: 8,
            default_price_range_percent: 20.0,
        }
    }
}

fn default_popular_terms() -> Vec<String> {
    [
        "organic cotton",
        "t-shirts",
        "hoodies",
        "polo shirts",
        "sweatshirts",
        "new arrivals",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub relevance: RelevanceWeights,
    pub suggest: SuggestConfig,
    pub related: RelatedConfig,
    /// Promoted terms shown next to the search box. Not derived from the catalog.
    pub popular_terms: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            relevance: RelevanceWeights::default(),
            suggest: SuggestConfig::default(),
            related: RelatedConfig::default(),
            popular_terms: default_popular_terms(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config at {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load engine config from {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            popular_terms = config.popular_terms.len(),
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Replace the promoted search terms.
    pub fn with_popular_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Reject weights that would produce negative or non-finite scores.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.relevance;
        let weights = [
            ("relevance.name", r.name),
            ("relevance.category", r.category),
            ("relevance.category_name", r.category_name),
            ("relevance.description", r.description),
            ("relevance.tag", r.tag),
            ("relevance.tag_similarity_threshold", r.tag_similarity_threshold),
            ("relevance.word_in_name", r.word_in_name),
            ("relevance.word_in_category", r.word_in_category),
            ("relevance.word_in_description", r.word_in_description),
            ("relevance.min_score", r.min_score),
            ("related.same_category_weight", self.related.same_category_weight),
            ("related.price_weight", self.related.price_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        // A non-positive default percent is allowed: it disables the price band.
        let percent = self.related.default_price_range_percent;
        if !percent.is_finite() {
            return Err(ConfigError::InvalidWeight {
                name: "related.default_price_range_percent",
                value: percent,
            });
        }

        let threshold = self.suggest.did_you_mean_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}
