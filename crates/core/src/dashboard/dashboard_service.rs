use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::error;

use mimi_api_client::{Product, ProductsApi, RevenueApi, RevenueFilter, RevenueSummary, SoldProduct};

use super::dashboard_model::DashboardSummary;
use crate::products::{count_for_rent, count_for_sale};
use crate::revenue::bucket_by_month;

/// Number of distinct orders represented in the sold-product feed.
///
/// Rows without an order id are excluded here - unlike grouping, where they
/// form the catch-all order - because a count of "orders" should not include
/// the orphan bucket.
pub fn count_distinct_orders(records: &[SoldProduct]) -> usize {
    records
        .iter()
        .filter_map(|record| record.order_id)
        .collect::<HashSet<i64>>()
        .len()
}

/// Assembles the dashboard numbers from the three fetch results.
pub fn build_summary(
    products: &[Product],
    summary: &RevenueSummary,
    sold_products: &[SoldProduct],
    now: DateTime<Utc>,
) -> DashboardSummary {
    DashboardSummary {
        products_for_sale: count_for_sale(products),
        products_for_rent: count_for_rent(products),
        order_count: count_distinct_orders(sold_products),
        total_revenue: summary.total_revenue,
        total_products_sold: summary.total_products_sold,
        revenue_by_month: bucket_by_month(sold_products, now),
    }
}

/// Contract for the dashboard page data.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Loads listings, summary and sold rows concurrently and assembles the
    /// dashboard. Any fetch failure degrades the whole page to zeros with an
    /// intact (empty) chart window.
    async fn load(&self, user_id: i64) -> DashboardSummary;
}

/// Service joining the three dashboard fetches.
pub struct DashboardService {
    products_api: Arc<dyn ProductsApi>,
    revenue_api: Arc<dyn RevenueApi>,
}

impl DashboardService {
    pub fn new(products_api: Arc<dyn ProductsApi>, revenue_api: Arc<dyn RevenueApi>) -> Self {
        Self {
            products_api,
            revenue_api,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn load(&self, user_id: i64) -> DashboardSummary {
        let filter = RevenueFilter::unbounded();
        let (products, summary, sold_products) = tokio::join!(
            self.products_api.get_user_products(user_id),
            self.revenue_api.get_revenue_summary(user_id, &filter),
            self.revenue_api.get_sold_products(user_id, &filter),
        );

        let now = Utc::now();
        match (products, summary, sold_products) {
            (Ok(products), Ok(summary), Ok(sold_products)) => {
                build_summary(&products, &summary, &sold_products, now)
            }
            (products, summary, sold_products) => {
                if let Err(e) = products {
                    error!("Dashboard load error (products): {:?}", e);
                }
                if let Err(e) = summary {
                    error!("Dashboard load error (summary): {:?}", e);
                }
                if let Err(e) = sold_products {
                    error!("Dashboard load error (sold products): {:?}", e);
                }
                build_summary(&[], &RevenueSummary::default(), &[], now)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mimi_api_client::{ApiError, TradeType};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sold(order_id: Option<i64>, amount: Decimal) -> SoldProduct {
        SoldProduct {
            id: 1,
            name: "Stroller".to_string(),
            total_amount: amount,
            order_id,
            sold_date: Some("2024-06-01".to_string()),
            ..Default::default()
        }
    }

    fn listing(trade_type: TradeType, buy: Option<Decimal>, rent: Option<Decimal>) -> Product {
        Product {
            id: 1,
            name: "Listing".to_string(),
            description: None,
            image_url: None,
            images: None,
            condition_percentage: None,
            trade_type: Some(trade_type),
            buy_price: buy,
            rent_price: rent,
            rent_unit: None,
            status: None,
            featured: false,
            is_new: false,
            created_at: None,
            address_contact: None,
            seller_id: None,
            seller_name: None,
            category_id: None,
            category_name: None,
        }
    }

    #[test]
    fn test_count_distinct_orders_ignores_missing_ids() {
        let records = vec![
            sold(Some(1), dec!(10)),
            sold(Some(1), dec!(20)),
            sold(Some(2), dec!(30)),
            sold(None, dec!(40)),
            sold(None, dec!(50)),
        ];
        assert_eq!(count_distinct_orders(&records), 2);
    }

    #[test]
    fn test_build_summary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let products = vec![
            listing(TradeType::BuyOnly, None, None),
            listing(TradeType::Both, Some(dec!(100)), Some(dec!(10))),
        ];
        let summary = RevenueSummary {
            total_revenue: dec!(500),
            total_products_sold: 3,
            period: String::new(),
        };
        let records = vec![sold(Some(1), dec!(500))];

        let dashboard = build_summary(&products, &summary, &records, now);
        assert_eq!(dashboard.products_for_sale, 2);
        assert_eq!(dashboard.products_for_rent, 1);
        assert_eq!(dashboard.order_count, 1);
        assert_eq!(dashboard.total_revenue, dec!(500));
        assert_eq!(dashboard.revenue_by_month.len(), 12);
        let june = dashboard
            .revenue_by_month
            .iter()
            .find(|b| b.key == "2024-06")
            .unwrap();
        assert_eq!(june.revenue, dec!(500));
    }

    struct FailingApis;

    #[async_trait]
    impl ProductsApi for FailingApis {
        async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
            unimplemented!()
        }

        async fn get_user_products(&self, _user_id: i64) -> Result<Vec<Product>, ApiError> {
            Err(ApiError::Timeout)
        }
    }

    #[async_trait]
    impl RevenueApi for FailingApis {
        async fn get_revenue_summary(
            &self,
            _user_id: i64,
            _filter: &RevenueFilter,
        ) -> Result<RevenueSummary, ApiError> {
            Ok(RevenueSummary::default())
        }

        async fn get_sold_products(
            &self,
            _user_id: i64,
            _filter: &RevenueFilter,
        ) -> Result<Vec<SoldProduct>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_load_degrades_to_zeroed_dashboard_with_full_chart() {
        let apis = Arc::new(FailingApis);
        let svc = DashboardService::new(apis.clone(), apis);
        let dashboard = svc.load(9).await;
        assert_eq!(dashboard.products_for_sale, 0);
        assert_eq!(dashboard.order_count, 0);
        assert_eq!(dashboard.total_revenue, Decimal::ZERO);
        assert_eq!(dashboard.revenue_by_month.len(), 12);
    }
}
