//! User profile and auth wire models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A marketplace user as returned by the user and auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    /// Stored file name; the full URL is built client-side.
    pub avatar_url: Option<String>,
}

/// Editable profile fields for `PUT /users/{id}`.
///
/// `birthday: None` serializes as an explicit `null` so the backend clears
/// the field rather than keeping a stale value.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}
