//! API surface traits.
//!
//! One trait per backend area, all implemented by [`ApiClient`]. Domain
//! services depend on these seams so their tests run without a network.
//!
//! [`ApiClient`]: crate::client::ApiClient

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{
    LoginRequest, OrderStatus, Product, RegisterRequest, RevenueFilter, RevenueSummary,
    SoldProduct, User, UserUpdate,
};

/// Revenue reporting endpoints.
#[async_trait]
pub trait RevenueApi: Send + Sync {
    /// `GET /revenue/summary/{userId}`
    async fn get_revenue_summary(
        &self,
        user_id: i64,
        filter: &RevenueFilter,
    ) -> Result<RevenueSummary, ApiError>;

    /// `GET /revenue/sold-products/{userId}` - the flat sold line-item feed.
    async fn get_sold_products(
        &self,
        user_id: i64,
        filter: &RevenueFilter,
    ) -> Result<Vec<SoldProduct>, ApiError>;
}

/// Product catalog endpoints.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `GET /products` - the public catalog.
    async fn get_all_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/user/{userId}` - one seller's listings.
    async fn get_user_products(&self, user_id: i64) -> Result<Vec<Product>, ApiError>;
}

/// Order mutation endpoints.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// `PUT /orders/{orderId}/status` - move an order to a new status.
    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), ApiError>;
}

/// User profile endpoints.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users/list` - every account, admin only.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /users/{id}`
    async fn get_user(&self, user_id: i64) -> Result<User, ApiError>;

    /// `PUT /users/{id}`
    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<User, ApiError>;

    /// `POST /users/{id}/avatar` - multipart upload, returns the refreshed user.
    async fn upload_avatar(
        &self,
        user_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<User, ApiError>;
}

/// Authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError>;
}
