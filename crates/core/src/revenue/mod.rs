//! Revenue module - monthly bucketing and the revenue page load.

mod revenue_model;
mod revenue_service;
mod revenue_traits;


pub use revenue_model::{MonthBucket, RevenueOverview, REVENUE_CHART_MONTHS};
pub use revenue_service::{bucket_by_month, RevenueService};
pub use revenue_traits::RevenueServiceTrait;
