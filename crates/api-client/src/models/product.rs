//! Product catalog wire models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// How a product may change hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    BuyOnly,
    RentOnly,
    Both,
}

/// Billing period for rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentUnit {
    Day,
    Week,
    Month,
    Year,
}

/// Listing visibility on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Hidden,
    SoldOut,
}

/// Product image list as the backend serves it.
///
/// Older endpoints return a plain array of URL strings, newer ones an array
/// of `{imageUrl}` objects. Both decode here so callers normalize through
/// [`ProductImages::first_url`] instead of sniffing shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductImages {
    Urls(Vec<String>),
    Entries(Vec<ProductImageEntry>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageEntry {
    pub image_url: Option<String>,
}

impl ProductImages {
    /// First usable image URL, if any.
    pub fn first_url(&self) -> Option<&str> {
        match self {
            Self::Urls(urls) => urls.first().map(String::as_str),
            Self::Entries(entries) => entries
                .first()
                .and_then(|entry| entry.image_url.as_deref()),
        }
    }
}

/// One catalog listing from `GET /products` or `GET /products/user/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<ProductImages>,
    pub condition_percentage: Option<i32>,
    pub trade_type: Option<TradeType>,
    pub buy_price: Option<Decimal>,
    pub rent_price: Option<Decimal>,
    pub rent_unit: Option<RentUnit>,
    pub status: Option<ProductStatus>,
    /// Curated highlight flag maintained by the backend.
    #[serde(default)]
    pub featured: bool,
    /// Explicit new-arrival flag; freshness by age is derived client-side.
    #[serde(default)]
    pub is_new: bool,
    /// Kept raw; parse with [`Product::created_datetime`].
    pub created_at: Option<String>,
    pub address_contact: Option<String>,
    pub seller_id: Option<i64>,
    pub seller_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
}

impl Product {
    /// Parses `createdAt`; `None` when absent or unparseable.
    pub fn created_datetime(&self) -> Option<NaiveDateTime> {
        self.created_at
            .as_deref()
            .and_then(lenient::parse_datetime_flexible)
    }
}
