//! Data types for catalog items.

use serde::{Deserialize, Serialize};

/// Whether an item is a recipe to cook or a product to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A dish with preparation steps and a time to make.
    Recipe,
    /// A pantry product (mix, seasoning) referenced by recipes.
    Product,
}

/// A recipe or product record with descriptive and dietary metadata.
///
/// Items are immutable once constructed. Tags are normalized to lower case
/// at construction so matching never has to re-fold case; their original
/// order is preserved for display.
///
/// Serialized field names are camelCase (`glutenFree`, `timeToMake`, …) to
/// match the wire format the chat client consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique identifier for the item.
    pub id: String,
    /// Display name; compared case-insensitively during matching.
    pub name: String,
    /// Whether this is a recipe or a product.
    pub kind: ItemKind,
    /// Lower-case free-text labels, original order preserved.
    pub tags: Vec<String>,
    /// True if the item is gluten-free.
    pub gluten_free: bool,
    /// True if the item is nut-free.
    pub nut_free: bool,
    /// Free text used for substring matching.
    pub description: String,
    /// Optional free-text category (e.g. a collection name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional natural-language preparation time ("20 minutes",
    /// "2-3 hours", "Ready to use"). Parsed on demand, never structured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_make: Option<String>,
    /// External reference, opaque to search.
    pub url: String,
}

impl CatalogItem {
    /// Create a new item with the given identity, kind, and tags.
    ///
    /// Tags are lower-cased here; everything else starts empty and is
    /// filled in with the `with_*` builders. Dietary flags default to
    /// `false` (not gluten-free, not nut-free).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ItemKind,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
            gluten_free: false,
            nut_free: false,
            description: String::new(),
            category: None,
            time_to_make: None,
            url: String::new(),
        }
    }

    /// Set the dietary flags.
    pub fn with_dietary(mut self, gluten_free: bool, nut_free: bool) -> Self {
        self.gluten_free = gluten_free;
        self.nut_free = nut_free;
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the natural-language preparation time.
    pub fn with_time_to_make(mut self, time_to_make: impl Into<String>) -> Self {
        self.time_to_make = Some(time_to_make.into());
        self
    }

    /// Set the external URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// True if the item carries the given lower-case tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
