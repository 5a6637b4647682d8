//! Session module - the signed-in user blob and page access gating.

mod session_model;
mod session_service;
mod session_store;

#[cfg(test)]
mod session_service_tests;

pub use session_model::{
    AccessDecision, AccessRequirement, SessionUser, ADMIN_ROLE, SESSION_USER_KEY,
};
pub use session_service::{SessionService, SessionServiceTrait};
pub use session_store::{MemorySessionStore, SessionStore};
