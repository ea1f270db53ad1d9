//! Catalog data model and the collaborator traits the engine consumes.
//!
//! The engine never owns catalog state. Callers hand it a slice of
//! [`CatalogItem`] per call, plus something that can resolve category codes
//! to display names.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Merchandising flags carried through from the catalog. Ranking ignores them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemFlags {
    pub is_new: bool,
    pub best_seller: bool,
    pub on_sale: bool,
}

/// A product as supplied by the catalog provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within one catalog snapshot.
    pub id: String,
    pub name: String,
    /// Short category code, e.g. `polo-shirts`.
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(flatten)]
    pub flags: ItemFlags,
    #[serde(default)]
    pub stock: u32,
}

impl CatalogItem {
    /// Create an item with empty description, no tags and no flags.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            tags: Vec::new(),
            price,
            flags: ItemFlags::default(),
            stock: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub const fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub const fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A category code and its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub code: String,
    pub display_name: String,
}

/// Maps a category code to its display name.
pub trait CategoryResolver {
    fn display_name(&self, code: &str) -> Option<&str>;
}

/// Resolver for callers without a category table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCategories;

impl CategoryResolver for NoCategories {
    fn display_name(&self, _code: &str) -> Option<&str> {
        None
    }
}

impl<S: std::hash::BuildHasher> CategoryResolver for HashMap<String, String, S> {
    fn display_name(&self, code: &str) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}

impl CategoryResolver for [Category] {
    fn display_name(&self, code: &str) -> Option<&str> {
        self.iter()
            .find(|category| category.code == code)
            .map(|category| category.display_name.as_str())
    }
}

impl<T: CategoryResolver + ?Sized> CategoryResolver for &T {
    fn display_name(&self, code: &str) -> Option<&str> {
        (**self).display_name(code)
    }
}

/// A materialized catalog: items plus the category table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CatalogSnapshot {
    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).context("Failed to parse catalog snapshot JSON")?;
        tracing::debug!(
            items = snapshot.items.len(),
            categories = snapshot.categories.len(),
            "Loaded catalog snapshot"
        );
        Ok(snapshot)
    }

    /// Display names of every category, in table order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.display_name.as_str())
            .collect()
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl CategoryResolver for CatalogSnapshot {
    fn display_name(&self, code: &str) -> Option<&str> {
        self.categories.as_slice().display_name(code)
    }
}
