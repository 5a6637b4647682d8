use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, error};

use mimi_api_client::{OrderStatus, OrdersApi, RevenueApi, RevenueFilter, SoldProduct};

use super::orders_model::Order;
use super::orders_traits::OrderServiceTrait;
use crate::errors::{OrderError, Result};

/// Groups feed rows into one [`Order`] per distinct `order_id`, in
/// first-seen order.
///
/// Rows without an order id all land in a single catch-all order keyed by
/// `None`. The first row seen for an id seeds the order-level fields; every
/// row appends a line item and adds its amount to the order total. Total
/// function: no input can make it fail.
pub fn group_by_order(records: &[SoldProduct]) -> Vec<Order> {
    let mut index: HashMap<Option<i64>, usize> = HashMap::new();
    let mut orders: Vec<Order> = Vec::new();

    for record in records {
        let slot = match index.get(&record.order_id) {
            Some(&existing) => existing,
            None => {
                index.insert(record.order_id, orders.len());
                orders.push(Order::seeded_from(record));
                orders.len() - 1
            }
        };
        orders[slot].push_record(record);
    }

    orders
}

/// Default display sort: newest sold date first; orders without a parseable
/// date sink to the end (they sort as the epoch).
pub fn sort_by_sold_date_desc(orders: &mut [Order]) {
    orders.sort_by_key(|order| Reverse(order.sold_timestamp_millis()));
}

/// Grouping plus the default display sort, as the orders page consumes it.
pub fn grouped_orders(records: &[SoldProduct]) -> Vec<Order> {
    let mut orders = group_by_order(records);
    sort_by_sold_date_desc(&mut orders);
    orders
}

/// The seller's one-click status advance: pending orders ship, shipping
/// orders complete, everything else has no action.
pub fn next_action(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Pending => Some(OrderStatus::Shipping),
        OrderStatus::Shipping => Some(OrderStatus::Completed),
        _ => None,
    }
}

/// Service for the orders page: loads the grouped view and submits status
/// changes, with at most one submission in flight per order id.
pub struct OrderService {
    revenue_api: Arc<dyn RevenueApi>,
    orders_api: Arc<dyn OrdersApi>,
    in_flight: DashMap<i64, ()>,
}

impl OrderService {
    pub fn new(revenue_api: Arc<dyn RevenueApi>, orders_api: Arc<dyn OrdersApi>) -> Self {
        Self {
            revenue_api,
            orders_api,
            in_flight: DashMap::new(),
        }
    }

    fn begin_update(&self, order_id: i64) -> Result<InFlightGuard<'_>> {
        match self.in_flight.entry(order_id) {
            Entry::Occupied(_) => Err(OrderError::UpdateInFlight(order_id).into()),
            Entry::Vacant(slot) => {
                slot.insert(());
                Ok(InFlightGuard {
                    map: &self.in_flight,
                    order_id,
                })
            }
        }
    }
}

/// Releases the per-order latch on every exit path.
struct InFlightGuard<'a> {
    map: &'a DashMap<i64, ()>,
    order_id: i64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.map.remove(&self.order_id);
    }
}

#[async_trait::async_trait]
impl OrderServiceTrait for OrderService {
    async fn load_orders(&self, user_id: i64, filter: &RevenueFilter) -> Vec<Order> {
        match self.revenue_api.get_sold_products(user_id, filter).await {
            Ok(records) => grouped_orders(&records),
            Err(e) => {
                error!("Error loading orders: {:?}", e);
                Vec::new()
            }
        }
    }

    async fn submit_status(&self, order_id: i64, status: OrderStatus) -> Result<()> {
        let _guard = self.begin_update(order_id)?;
        self.orders_api.update_order_status(order_id, status).await?;
        debug!("Order {} moved to {}", order_id, status.as_str());
        Ok(())
    }

    fn is_updating(&self, order_id: i64) -> bool {
        self.in_flight.contains_key(&order_id)
    }
}
