//! Dashboard module - the seller overview cards and chart data.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::DashboardSummary;
pub use dashboard_service::{
    build_summary, count_distinct_orders, DashboardService, DashboardServiceTrait,
};
