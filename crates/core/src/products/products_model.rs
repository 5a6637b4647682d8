//! Product display models and the showcase selection policy.

use serde::Serialize;

use mimi_api_client::Product;

use super::products_constants::SHOWCASE_FALLBACK_COUNT;

/// Display badges derived for one catalog product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFlags {
    pub featured: bool,
    pub is_new: bool,
}

/// Selection policy for the home page's showcase rows.
///
/// The fallbacks fill the rows while the catalog has no flagged products
/// yet. They are product policy, not classification; tune or zero them per
/// deployment.
#[derive(Debug, Clone, Copy)]
pub struct ShowcasePolicy {
    /// Row size when no product is featured: the first N listings.
    pub featured_fallback: usize,
    /// Row size when no product is new: the last N listings.
    pub new_fallback: usize,
}

impl Default for ShowcasePolicy {
    fn default() -> Self {
        Self {
            featured_fallback: SHOWCASE_FALLBACK_COUNT,
            new_fallback: SHOWCASE_FALLBACK_COUNT,
        }
    }
}

impl ShowcasePolicy {
    /// All featured products, or the first `featured_fallback` listings when
    /// none are flagged. Listing order is preserved either way.
    pub fn featured_selection(&self, products: &[Product]) -> Vec<Product> {
        let featured: Vec<Product> = products.iter().filter(|p| p.featured).cloned().collect();
        if featured.is_empty() {
            products.iter().take(self.featured_fallback).cloned().collect()
        } else {
            featured
        }
    }

    /// All new products, or the last `new_fallback` listings when none are
    /// flagged.
    pub fn new_selection(&self, products: &[Product]) -> Vec<Product> {
        let fresh: Vec<Product> = products.iter().filter(|p| p.is_new).cloned().collect();
        if fresh.is_empty() {
            let start = products.len().saturating_sub(self.new_fallback);
            products[start..].to_vec()
        } else {
            fresh
        }
    }
}
