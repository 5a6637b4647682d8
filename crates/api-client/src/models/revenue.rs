//! Revenue reporting wire models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Aggregate revenue figures from `GET /revenue/summary/{userId}`.
///
/// `Default` is the zeroed summary the console falls back to when the
/// fetch fails.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    #[serde(default, deserialize_with = "lenient::decimal_or_zero")]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub total_products_sold: i64,
    /// Human-readable period description, backend-formatted.
    #[serde(default)]
    pub period: String,
}

/// Optional query filter shared by the revenue endpoints.
///
/// Only present fields become query parameters; the backend treats an absent
/// parameter as "unbounded", mirroring the console's "all" choices.
#[derive(Debug, Clone, Default)]
pub struct RevenueFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl RevenueFilter {
    /// Filter with no bounds (the dashboard's all-time view).
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Query pairs for the present fields, ISO dates.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(ref category) = self.category {
            params.push(("category", category.clone()));
        }
        params
    }
}
