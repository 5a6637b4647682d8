//! Order domain models derived from the sold-product feed.

use rust_decimal::Decimal;
use serde::Serialize;

use mimi_api_client::models::parse_datetime_flexible;
use mimi_api_client::{OrderStatus, SoldProduct};

use super::orders_constants::DEFAULT_ORDER_STATUS;

/// One line item inside an aggregated order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub quantity: i64,
    pub total_amount: Decimal,
}

impl OrderItem {
    pub(crate) fn from_record(record: &SoldProduct) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            quantity: record.quantity(),
            total_amount: record.total_amount,
        }
    }
}

/// An order reassembled from the feed, rebuilt on every aggregation call.
///
/// `order_id` is `None` for the catch-all group collecting feed rows that
/// carry no order id. Invariant: `order_total` equals the sum of the items'
/// `total_amount`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Option<i64>,
    pub order_status: OrderStatus,
    pub sold_date: Option<String>,
    pub items: Vec<OrderItem>,
    pub order_total: Decimal,
    pub shipping_name: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub note: String,
}

impl Order {
    /// Seeds the order-level fields from the first feed row seen for this
    /// order id. Later rows never override them.
    pub(crate) fn seeded_from(record: &SoldProduct) -> Self {
        Self {
            order_id: record.order_id,
            order_status: record.order_status.unwrap_or(DEFAULT_ORDER_STATUS),
            sold_date: record.sold_date.clone(),
            items: Vec::new(),
            order_total: Decimal::ZERO,
            shipping_name: record.shipping_name.clone().unwrap_or_default(),
            shipping_phone: record.shipping_phone.clone().unwrap_or_default(),
            shipping_address: record.shipping_address.clone().unwrap_or_default(),
            note: record.note.clone().unwrap_or_default(),
        }
    }

    /// Appends the row as a line item and accumulates the order total.
    pub(crate) fn push_record(&mut self, record: &SoldProduct) {
        let item = OrderItem::from_record(record);
        self.order_total += item.total_amount;
        self.items.push(item);
    }

    /// Sort key for the display ordering: milliseconds since the epoch,
    /// with missing or unparseable dates sorting as the epoch itself.
    pub fn sold_timestamp_millis(&self) -> i64 {
        self.sold_date
            .as_deref()
            .and_then(parse_datetime_flexible)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0)
    }
}
