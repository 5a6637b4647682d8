//! Revenue service trait.

use async_trait::async_trait;

use mimi_api_client::RevenueFilter;

use super::revenue_model::RevenueOverview;

/// Contract for the revenue page data.
#[async_trait]
pub trait RevenueServiceTrait: Send + Sync {
    /// Loads the summary and the sold-product feed concurrently.
    ///
    /// If either fetch fails the whole view degrades to the zeroed default,
    /// matching the page's all-or-nothing load. Logged, never retried.
    async fn load_overview(&self, user_id: i64, filter: &RevenueFilter) -> RevenueOverview;
}
