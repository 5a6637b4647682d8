//! Catalog service trait.

use async_trait::async_trait;

use mimi_api_client::Product;

/// Contract for catalog and listing loads.
///
/// Both loads degrade to an empty list when the fetch fails; logged, never
/// retried.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    /// The public catalog with display badges resolved against the current
    /// instant.
    async fn load_catalog(&self) -> Vec<Product>;

    /// One seller's listings, badges untouched.
    async fn load_seller_listings(&self, user_id: i64) -> Vec<Product>;
}
