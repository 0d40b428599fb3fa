use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload for a new resident account.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub apartment_number: Option<String>,
}

/// Login payload; `username` also accepts the account email.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Authenticated user payload returned by register/login/me.
///
/// `permissions` is the flattened capability map resolved from all of the
/// user's group memberships: resource name to the union of granted actions.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub permissions: HashMap<String, Vec<String>>,
}

/// Response for successful register/login: bearer token plus user payload.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TokenResponseDto {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AuthUserDto,
}
