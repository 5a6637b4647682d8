//! Mimi Core - domain models, services, and traits for the seller console.
//!
//! This crate contains the client-side business logic of the Mimi
//! marketplace: order aggregation, revenue bucketing, product freshness,
//! dashboard metrics, session gating, and profile management. It is
//! network-agnostic at the seams - backend access goes through the traits
//! defined in `mimi-api-client`, so every transform here is testable
//! in-process.

pub mod dashboard;
pub mod errors;
pub mod images;
pub mod orders;
pub mod products;
pub mod revenue;
pub mod session;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
