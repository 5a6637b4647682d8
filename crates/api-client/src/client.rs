//! HTTP client for the marketplace backend.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::ApiError;
use crate::models::{
    LoginRequest, OrderStatus, Product, RegisterRequest, RevenueFilter, RevenueSummary,
    SoldProduct, User, UserUpdate,
};
use crate::traits::{AuthApi, OrdersApi, ProductsApi, RevenueApi, UsersApi};

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "MIMI_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Mimi backend REST API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    /// Base URL without a trailing slash, e.g. `http://localhost:8081/api`.
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    /// Creates a client from `MIMI_API_BASE_URL`, defaulting to localhost.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Backend origin: the base URL with its `/api` suffix stripped.
    ///
    /// Static assets (product images, avatars) are served from the origin,
    /// not under the API prefix.
    pub fn origin(&self) -> String {
        self.base_url
            .trim_end_matches('/')
            .trim_end_matches("/api")
            .to_string()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a request and applies the shared non-2xx message policy.
    ///
    /// Returns the raw body text of a successful response.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Network(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message: Self::error_message(&body, fallback),
            });
        }

        Ok(body)
    }

    /// Extracts the error message from a failure body.
    ///
    /// A JSON string body or unparseable plain text is the backend speaking
    /// to the user and passes through verbatim; structured bodies and empty
    /// bodies fall back to the caller's default.
    fn error_message(body: &str, fallback: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(message)) => message,
            Ok(_) => fallback.to_string(),
            Err(_) => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    fallback.to_string()
                } else {
                    trimmed.to_string()
                }
            }
        }
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("Mimi API request: GET {}", url);
        let body = self.execute(self.http.get(&url).query(query), fallback).await?;
        Self::decode(&body)
    }
}

#[async_trait]
impl RevenueApi for ApiClient {
    async fn get_revenue_summary(
        &self,
        user_id: i64,
        filter: &RevenueFilter,
    ) -> Result<RevenueSummary, ApiError> {
        self.get_json(
            &format!("revenue/summary/{}", user_id),
            &filter.query_params(),
            "Unable to load the revenue summary",
        )
        .await
    }

    async fn get_sold_products(
        &self,
        user_id: i64,
        filter: &RevenueFilter,
    ) -> Result<Vec<SoldProduct>, ApiError> {
        self.get_json(
            &format!("revenue/sold-products/{}", user_id),
            &filter.query_params(),
            "Unable to load the sold products list",
        )
        .await
    }
}

#[async_trait]
impl ProductsApi for ApiClient {
    async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("products", &[], "Unable to load products").await
    }

    async fn get_user_products(&self, user_id: i64) -> Result<Vec<Product>, ApiError> {
        self.get_json(
            &format!("products/user/{}", user_id),
            &[],
            "Unable to load your listings",
        )
        .await
    }
}

#[async_trait]
impl OrdersApi for ApiClient {
    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("orders/{}/status", order_id));
        debug!("Mimi API request: PUT {} -> {}", url, status.as_str());
        let request = self
            .http
            .put(&url)
            .json(&serde_json::json!({ "status": status }));
        // The confirmation body is not load-bearing; success is enough.
        self.execute(request, "Unable to update the order status")
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UsersApi for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users/list", &[], "Unable to load the user list")
            .await
    }

    async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get_json(
            &format!("users/{}", user_id),
            &[],
            "Unable to load the user profile",
        )
        .await
    }

    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        let url = self.endpoint(&format!("users/{}", user_id));
        debug!("Mimi API request: PUT {}", url);
        let body = self
            .execute(self.http.put(&url).json(update), "Profile update failed")
            .await?;
        Self::decode(&body)
    }

    async fn upload_avatar(
        &self,
        user_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<User, ApiError> {
        let url = self.endpoint(&format!("users/{}/avatar", user_id));
        debug!("Mimi API request: POST {} ({} bytes)", url, bytes.len());
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let body = self
            .execute(self.http.post(&url).multipart(form), "Avatar upload failed")
            .await?;
        Self::decode(&body)
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let url = self.endpoint("auth/login");
        debug!("Mimi API request: POST {}", url);
        let body = self
            .execute(self.http.post(&url).json(request), "Sign-in failed")
            .await?;
        Self::decode(&body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let url = self.endpoint("auth/register");
        debug!("Mimi API request: POST {}", url);
        let body = self
            .execute(self.http.post(&url).json(request), "Registration failed")
            .await?;
        Self::decode(&body)
    }
}
