//! Users module - profile management and sign-in/sign-out flows.

mod auth_service;
mod users_service;
mod users_traits;


pub use auth_service::AuthService;
pub use users_service::ProfileService;
pub use users_traits::{AuthServiceTrait, ProfileServiceTrait};
