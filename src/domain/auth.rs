//! Authenticated session payloads exchanged with the backend.

use serde::{Deserialize, Serialize};

use crate::domain::types::Email;

/// Credentials forwarded to `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

/// Profile of the signed-in user, kept in the session under `user`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Backend answer to a successful login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}
