//! Orders module - reassembles the flat sold-product feed into orders.

mod orders_constants;
mod orders_model;
mod orders_service;
mod orders_traits;



pub use orders_constants::*;
pub use orders_model::{Order, OrderItem};
pub use orders_service::{
    group_by_order, grouped_orders, next_action, sort_by_sold_date_desc, OrderService,
};
pub use orders_traits::OrderServiceTrait;
