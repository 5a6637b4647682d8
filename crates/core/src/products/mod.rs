//! Products module - freshness classification and catalog services.

mod products_constants;
mod products_model;
mod products_service;
mod products_traits;


pub use products_constants::*;
pub use products_model::{ProductFlags, ShowcasePolicy};
pub use products_service::{
    classify, count_for_rent, count_for_sale, flags_for, CatalogService,
};
pub use products_traits::CatalogServiceTrait;
