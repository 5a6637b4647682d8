//! Wire models for the marketplace backend.
//!
//! Field names follow the backend's camelCase JSON. Deserialization is
//! deliberately lenient where the feed is known to be messy (amounts,
//! statuses, dates); see [`lenient`] for the coercion rules.

pub mod lenient;

mod order;
mod product;
mod revenue;
mod user;

pub use lenient::{parse_datetime_flexible, parse_decimal_tolerant};
pub use order::{OrderStatus, SoldProduct};
pub use product::{Product, ProductImageEntry, ProductImages, ProductStatus, RentUnit, TradeType};
pub use revenue::{RevenueFilter, RevenueSummary};
pub use user::{LoginRequest, RegisterRequest, User, UserUpdate};
