//! Sold-product feed and order status wire models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Lifecycle status of a marketplace order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Parses a status string case-insensitively; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "SHIPPING" => Some(Self::Shipping),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipping => "SHIPPING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// One sold line item from `GET /revenue/sold-products/{userId}`.
///
/// Each row is one product inside one order; rows sharing an `orderId`
/// belong to the same order and repeat its shipping/customer fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SoldProduct {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    /// Units sold; the feed omits it for legacy rows.
    pub quantity: Option<i64>,
    /// Line revenue. Lenient: numeric string or garbage coerces to zero.
    #[serde(default, deserialize_with = "lenient::decimal_or_zero")]
    pub total_amount: Decimal,
    pub category: Option<String>,
    /// Absent for rows imported before orders existed.
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::enum_or_none")]
    pub order_status: Option<OrderStatus>,
    /// Kept raw; parse with [`SoldProduct::sold_datetime`].
    pub sold_date: Option<String>,
    pub shipping_name: Option<String>,
    pub shipping_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub note: Option<String>,
}

impl SoldProduct {
    pub fn quantity(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Parses `soldDate`; `None` when absent or unparseable.
    pub fn sold_datetime(&self) -> Option<NaiveDateTime> {
        self.sold_date
            .as_deref()
            .and_then(lenient::parse_datetime_flexible)
    }
}
