use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use log::{debug, error};
use num_traits::Zero;
use rust_decimal::Decimal;

use mimi_api_client::{RevenueApi, RevenueFilter, SoldProduct};

use super::revenue_model::{month_key, MonthBucket, RevenueOverview, REVENUE_CHART_MONTHS};
use super::revenue_traits::RevenueServiceTrait;
use crate::utils::time_utils::trailing_months;

/// Buckets sold rows into the trailing 12-month revenue histogram.
///
/// Always returns exactly [`REVENUE_CHART_MONTHS`] buckets for the calendar
/// months ending with the month containing `now`, oldest first, whether or
/// not any row falls inside them. Rows without a parseable sold date
/// contribute nothing; rows outside the window are dropped silently.
/// Deterministic for a fixed `(records, now)`.
pub fn bucket_by_month(records: &[SoldProduct], now: DateTime<Utc>) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = trailing_months(now, REVENUE_CHART_MONTHS)
        .into_iter()
        .map(|(year, month)| MonthBucket::empty(year, month))
        .collect();

    if records.is_empty() {
        return buckets;
    }

    let mut by_key: HashMap<String, Decimal> = buckets
        .iter()
        .map(|bucket| (bucket.key.clone(), Decimal::zero()))
        .collect();

    for record in records {
        let sold = match record.sold_datetime() {
            Some(sold) => sold,
            None => continue,
        };
        // No overflow bucket: months outside the window have no entry.
        if let Some(revenue) = by_key.get_mut(&month_key(sold.year(), sold.month())) {
            *revenue += record.total_amount;
        }
    }

    for bucket in &mut buckets {
        if let Some(revenue) = by_key.remove(&bucket.key) {
            bucket.revenue = revenue;
        }
    }

    buckets
}

/// Service for the revenue page: summary and sold-product feed in one load.
pub struct RevenueService {
    revenue_api: Arc<dyn RevenueApi>,
}

impl RevenueService {
    pub fn new(revenue_api: Arc<dyn RevenueApi>) -> Self {
        Self { revenue_api }
    }
}

#[async_trait::async_trait]
impl RevenueServiceTrait for RevenueService {
    async fn load_overview(&self, user_id: i64, filter: &RevenueFilter) -> RevenueOverview {
        debug!("Loading revenue overview for user {}", user_id);

        let (summary, sold_products) = tokio::join!(
            self.revenue_api.get_revenue_summary(user_id, filter),
            self.revenue_api.get_sold_products(user_id, filter),
        );

        match (summary, sold_products) {
            (Ok(summary), Ok(sold_products)) => RevenueOverview {
                summary,
                sold_products,
            },
            (summary, sold_products) => {
                if let Err(e) = summary {
                    error!("Error loading revenue summary: {:?}", e);
                }
                if let Err(e) = sold_products {
                    error!("Error loading sold products: {:?}", e);
                }
                RevenueOverview::default()
            }
        }
    }
}
