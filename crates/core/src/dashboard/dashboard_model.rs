//! Dashboard domain models.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::revenue::MonthBucket;

/// Aggregated numbers behind the dashboard cards and the monthly chart.
///
/// `revenue_by_month` always carries the full trailing window, even when the
/// underlying fetches failed and everything else is zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub products_for_sale: usize,
    pub products_for_rent: usize,
    pub order_count: usize,
    pub total_revenue: Decimal,
    pub total_products_sold: i64,
    pub revenue_by_month: Vec<MonthBucket>,
}
