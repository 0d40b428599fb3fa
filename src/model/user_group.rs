use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One permission grant: a resource and the actions allowed on it.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PermissionDto {
    pub resource: String,
    pub actions: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<PermissionDto>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserGroupDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionDto>,
}

/// Partial group update; absent fields keep their current value.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserGroupDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<PermissionDto>>,
    pub is_active: Option<bool>,
}

/// Payload for assigning a user to / removing a user from a group.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembershipDto {
    pub user_id: i32,
    pub group_id: i32,
}

/// Minimal user listing entry for group membership views.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupUserDto {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub email: String,
}
