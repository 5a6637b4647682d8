use mimi_api_client::OrderStatus;

/// Status seeded into an order whose feed rows carry none.
pub const DEFAULT_ORDER_STATUS: OrderStatus = OrderStatus::Pending;
