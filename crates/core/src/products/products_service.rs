use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::error;
use rust_decimal::Decimal;

use mimi_api_client::{Product, ProductsApi, TradeType};

use super::products_constants::NEW_PRODUCT_WINDOW_DAYS;
use super::products_model::ProductFlags;
use super::products_traits::CatalogServiceTrait;

/// Derives the display badges for one product at the given instant.
///
/// `featured` passes the catalog flag through. `is_new` is the explicit flag
/// when set, otherwise whether the product was created within the freshness
/// window - elapsed time, not calendar days. A missing or unparseable
/// creation date means not new by age.
pub fn flags_for(product: &Product, now: DateTime<Utc>) -> ProductFlags {
    let fresh_by_age = product
        .created_datetime()
        .map(|created| {
            now.naive_utc().signed_duration_since(created)
                <= Duration::days(NEW_PRODUCT_WINDOW_DAYS)
        })
        .unwrap_or(false);

    ProductFlags {
        featured: product.featured,
        is_new: product.is_new || fresh_by_age,
    }
}

/// Resolves the badges of every product in place, listing order untouched.
pub fn classify(products: Vec<Product>, now: DateTime<Utc>) -> Vec<Product> {
    products
        .into_iter()
        .map(|mut product| {
            let flags = flags_for(&product, now);
            product.featured = flags.featured;
            product.is_new = flags.is_new;
            product
        })
        .collect()
}

/// Listings offered for sale: sale-only, or hybrid with a positive buy price.
pub fn count_for_sale(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|p| match p.trade_type {
            Some(TradeType::BuyOnly) => true,
            Some(TradeType::Both) => p.buy_price.map_or(false, |price| price > Decimal::ZERO),
            _ => false,
        })
        .count()
}

/// Listings offered for rent: rent-only, or hybrid with a positive rent price.
pub fn count_for_rent(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|p| match p.trade_type {
            Some(TradeType::RentOnly) => true,
            Some(TradeType::Both) => p.rent_price.map_or(false, |price| price > Decimal::ZERO),
            _ => false,
        })
        .count()
}

/// Service for catalog and listing fetches.
pub struct CatalogService {
    products_api: Arc<dyn ProductsApi>,
}

impl CatalogService {
    pub fn new(products_api: Arc<dyn ProductsApi>) -> Self {
        Self { products_api }
    }
}

#[async_trait::async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn load_catalog(&self) -> Vec<Product> {
        match self.products_api.get_all_products().await {
            Ok(products) => classify(products, Utc::now()),
            Err(e) => {
                error!("Error loading products: {:?}", e);
                Vec::new()
            }
        }
    }

    async fn load_seller_listings(&self, user_id: i64) -> Vec<Product> {
        match self.products_api.get_user_products(user_id).await {
            Ok(products) => products,
            Err(e) => {
                error!("Error loading listings for user {}: {:?}", user_id, e);
                Vec::new()
            }
        }
    }
}
