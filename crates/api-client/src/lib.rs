//! Mimi API Client Crate
//!
//! Typed access to the Mimi marketplace backend REST API for the seller
//! console. The backend owns all persistent state; this crate only fetches
//! and decodes it.
//!
//! # Overview
//!
//! The client covers:
//! - Revenue reporting: period summary and the flat sold-product feed
//! - Product catalog: the public listing and a seller's own listings
//! - Order status transitions submitted by the seller
//! - User profiles, avatar upload, and the auth endpoints
//!
//! # Decoding policy
//!
//! The backend is lenient territory: numeric fields may arrive as numbers,
//! numeric strings, or garbage, and several identifiers may be absent.
//! Malformed numbers decode to zero and malformed enums to `None` instead of
//! failing the whole payload - a wrong zero renders, a decode error does not.
//! See [`models`] for the per-field rules.
//!
//! # Error policy
//!
//! Non-2xx responses surface as [`ApiError::Backend`] carrying the message
//! the backend sent when it sent one: a JSON string body or a plain-text body
//! becomes the message verbatim, anything else falls back to the
//! caller-supplied default. See [`ApiClient`].

pub mod client;
pub mod errors;
pub mod models;
pub mod traits;

pub use client::ApiClient;
pub use errors::ApiError;

pub use models::{
    LoginRequest, OrderStatus, Product, ProductImages, ProductStatus, RegisterRequest, RentUnit,
    RevenueFilter, RevenueSummary, SoldProduct, TradeType, User, UserUpdate,
};

pub use traits::{AuthApi, OrdersApi, ProductsApi, RevenueApi, UsersApi};
