//! Order service trait.

use async_trait::async_trait;

use mimi_api_client::{OrderStatus, RevenueFilter};

use super::orders_model::Order;
use crate::errors::Result;

/// Contract for the orders page data and actions.
#[async_trait]
pub trait OrderServiceTrait: Send + Sync {
    /// Loads the seller's sold rows and returns them grouped into orders,
    /// newest first. A failed fetch degrades to an empty list; it is logged,
    /// never retried.
    async fn load_orders(&self, user_id: i64, filter: &RevenueFilter) -> Vec<Order>;

    /// Submits a status change for one order.
    ///
    /// At most one submission per order id may be in flight; a concurrent
    /// second call is rejected with [`OrderError::UpdateInFlight`], not
    /// queued.
    ///
    /// [`OrderError::UpdateInFlight`]: crate::errors::OrderError::UpdateInFlight
    async fn submit_status(&self, order_id: i64, status: OrderStatus) -> Result<()>;

    /// True while a submission for this order id is in flight.
    fn is_updating(&self, order_id: i64) -> bool;
}
