use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::PublicUser;

/// Request body for signup. Absent fields arrive as empty strings.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: PublicUser,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: CallerInfo,
}

/// Identity taken from the verified token.
#[derive(Debug, Serialize)]
pub struct CallerInfo {
    pub id: Uuid,
    pub email: String,
}
