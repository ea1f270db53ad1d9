//! The engine facade: configuration plus the four catalog entry points.

use crate::catalog::{CatalogItem, CategoryResolver};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::related::{self, RelatedOptions};
use crate::search::{self, ScoredResult, SearchRequest};

/// Stateless search and recommendation engine.
///
/// Holds only configuration; every call reads caller-owned catalog data and
/// returns freshly allocated results, so one engine can serve any number of
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    /// Build an engine from `config`, rejecting weights that could push a
    /// score below zero.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank `catalog` for a free-text query.
    ///
    /// `limit` falls back to the configured default (20). Queries shorter than
    /// two characters after normalization return nothing.
    pub fn search<'a, R: CategoryResolver + ?Sized>(
        &self,
        query: &str,
        catalog: &'a [CatalogItem],
        categories: &R,
        limit: Option<usize>,
    ) -> Vec<ScoredResult<'a>> {
        let request = SearchRequest {
            query: query.to_string(),
            limit,
            ..SearchRequest::default()
        };
        self.search_with(&request, catalog, categories)
    }

    /// Rank `catalog` for a request carrying filters and a sort order.
    pub fn search_with<'a, R: CategoryResolver + ?Sized>(
        &self,
        request: &SearchRequest,
        catalog: &'a [CatalogItem],
        categories: &R,
    ) -> Vec<ScoredResult<'a>> {
        search::rank(request, catalog, categories, &self.config.relevance)
    }

    /// Autocomplete strings: item names, then category names, containing the query.
    pub fn suggest<'a, S: AsRef<str>>(
        &self,
        query: &str,
        catalog: &'a [CatalogItem],
        category_names: &'a [S],
        limit: Option<usize>,
    ) -> Vec<&'a str> {
        search::suggest(
            query,
            catalog,
            category_names,
            self.config.relevance.min_query_length,
            limit.unwrap_or(self.config.suggest.default_limit),
        )
    }

    /// A spelling-corrected query, for when a search comes back empty.
    pub fn did_you_mean<S: AsRef<str>>(
        &self,
        query: &str,
        catalog: &[CatalogItem],
        category_names: &[S],
    ) -> Option<String> {
        search::did_you_mean(
            query,
            catalog,
            category_names,
            self.config.relevance.min_query_length,
            self.config.suggest.did_you_mean_threshold,
        )
    }

    /// Items related to `reference` by category and price.
    pub fn related_items<'a>(
        &self,
        reference: &CatalogItem,
        catalog: &'a [CatalogItem],
        options: Option<&RelatedOptions>,
    ) -> Vec<&'a CatalogItem> {
        let defaults;
        let options = match options {
            Some(options) => options,
            None => {
                defaults = self.default_related_options();
                &defaults
            }
        };
        related::related_items(reference, catalog, options, &self.config.related)
    }

    /// Related-item options seeded from this engine's configuration.
    pub const fn default_related_options(&self) -> RelatedOptions {
        RelatedOptions::from_config(&self.config.related)
    }

    /// Promoted search terms from configuration.
    pub fn popular_terms(&self) -> &[String] {
        &self.config.popular_terms
    }
}
