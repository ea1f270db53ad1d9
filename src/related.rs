//! Related-item selection for product detail pages.
//!
//! Candidates are scored purely on catalog constraints: sharing the
//! reference item's category and sitting inside a price band around it. No
//! text similarity is involved.

use crate::catalog::CatalogItem;
use crate::config::RelatedConfig;
use serde::{Deserialize, Serialize};

/// Which constraints to apply and how many items to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelatedOptions {
    pub limit: usize,
    pub include_same_category: bool,
    pub include_similar_price: bool,
    /// Half-width of the price band as a percentage of the reference price.
    /// Zero or negative disables the price constraint.
    pub price_range_percent: f64,
}

impl Default for RelatedOptions {
    fn default() -> Self {
        Self::from_config(&RelatedConfig::default())
    }
}

impl RelatedOptions {
    /// Options using the configured default limit and price band.
    pub const fn from_config(config: &RelatedConfig) -> Self {
        Self {
            limit: config.default_limit,
            include_same_category: true,
            include_similar_price: true,
            price_range_percent: config.default_price_range_percent,
        }
    }

    pub const fn category_only(mut self) -> Self {
        self.include_same_category = true;
        self.include_similar_price = false;
        self
    }

    pub const fn price_only(mut self) -> Self {
        self.include_same_category = false;
        self.include_similar_price = true;
        self
    }

    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub const fn with_price_range_percent(mut self, percent: f64) -> Self {
        self.price_range_percent = percent;
        self
    }
}

/// Price band around a reference price, if one applies.
#[derive(Debug, Clone, Copy)]
struct PriceBand {
    reference: f64,
    /// Maximum relative difference, e.g. `0.2` for ±20%.
    tolerance: f64,
}

impl PriceBand {
    fn new(reference: &CatalogItem, options: &RelatedOptions) -> Option<Self> {
        if !options.include_similar_price {
            return None;
        }
        if reference.price <= 0.0 {
            tracing::debug!(id = %reference.id, "Reference item has no price, skipping price band");
            return None;
        }
        if options.price_range_percent <= 0.0 || !options.price_range_percent.is_finite() {
            tracing::warn!(
                percent = options.price_range_percent,
                "Non-positive price range, price constraint disabled"
            );
            return None;
        }
        Some(Self {
            reference: reference.price,
            tolerance: options.price_range_percent / 100.0,
        })
    }

    /// Relative distance from the reference price, when inside the band.
    fn delta(&self, price: f64) -> Option<f64> {
        let delta = (price - self.reference).abs() / self.reference;
        (delta <= self.tolerance).then_some(delta)
    }
}

/// Constraint score of one candidate. Zero means "not related".
fn candidate_score(
    reference: &CatalogItem,
    candidate: &CatalogItem,
    band: Option<PriceBand>,
    options: &RelatedOptions,
    config: &RelatedConfig,
) -> f64 {
    let mut score = 0.0;
    if options.include_same_category && candidate.category == reference.category {
        score += config.same_category_weight;
    }
    if let Some(delta) = band.and_then(|band| band.delta(candidate.price)) {
        score += config.price_weight / (1.0 + delta);
    }
    score
}

/// Items related to `reference`, best first.
///
/// The reference itself (matched by id) is never returned. Each enabled
/// constraint contributes to a candidate's score; candidates scoring zero are
/// dropped. A same-category item outside the price band still qualifies, just
/// ranked below closer matches. Ties keep catalog order.
pub fn related_items<'a>(
    reference: &CatalogItem,
    catalog: &'a [CatalogItem],
    options: &RelatedOptions,
    config: &RelatedConfig,
) -> Vec<&'a CatalogItem> {
    let band = PriceBand::new(reference, options);

    let mut scored: Vec<(&'a CatalogItem, f64)> = catalog
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| {
            let score = candidate_score(reference, candidate, band, options, config);
            (candidate, score)
        })
        .filter(|(_, score)| *score > 0.0)
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored.truncate(options.limit);

    tracing::debug!(
        reference = %reference.id,
        catalog = catalog.len(),
        returned = scored.len(),
        "Selected related items"
    );
    scored.into_iter().map(|(item, _)| item).collect()
}
