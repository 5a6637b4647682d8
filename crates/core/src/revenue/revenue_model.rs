//! Revenue domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use mimi_api_client::{RevenueSummary, SoldProduct};

use crate::utils::time_utils::month_start_utc;

/// Number of trailing calendar months in the revenue chart.
pub const REVENUE_CHART_MONTHS: usize = 12;

/// One calendar month's accumulated revenue for the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    /// Zero-padded lookup key, e.g. `"2024-05"`.
    pub key: String,
    /// Axis label with the 1-indexed month unpadded, e.g. `"T5/2024"`.
    pub label: String,
    pub revenue: Decimal,
    /// First instant of the month, the chart's x-axis anchor.
    pub full_date: DateTime<Utc>,
}

impl MonthBucket {
    pub(crate) fn empty(year: i32, month: u32) -> Self {
        Self {
            key: month_key(year, month),
            label: month_label(year, month),
            revenue: Decimal::ZERO,
            full_date: month_start_utc(year, month),
        }
    }
}

pub(crate) fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

pub(crate) fn month_label(year: i32, month: u32) -> String {
    format!("T{}/{}", month, year)
}

/// Combined result of the revenue page load.
///
/// `Default` is the degraded view shown when a fetch fails: zeroed summary,
/// nothing sold.
#[derive(Debug, Clone, Default)]
pub struct RevenueOverview {
    pub summary: RevenueSummary,
    pub sold_products: Vec<SoldProduct>,
}
