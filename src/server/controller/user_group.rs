use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto, MessageDto},
        user_group::{
            CreateUserGroupDto, GroupMembershipDto, GroupUserDto, UpdateUserGroupDto, UserGroupDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::permission::{Action, Resource},
        service::user_group::UserGroupService,
        state::AppState,
    },
};

/// Tag for grouping user group endpoints in OpenAPI documentation
pub static USER_GROUP_TAG: &str = "user_group";

/// Create a permission group.
///
/// # Access Control
/// - `userGroup:create`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Group name, description, and permission grants
///
/// # Returns
/// - `201 Created` - Created group
/// - `400 Bad Request` - Unknown resource/action name, or name already taken
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-create capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = USER_GROUP_TAG,
    request_body = CreateUserGroupDto,
    responses(
        (status = 201, description = "Created group", body = DataDto<UserGroupDto>),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Create)
        .await?;

    let group = UserGroupService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(group))))
}

/// List every permission group.
///
/// # Access Control
/// - `userGroup:read`
///
/// # Returns
/// - `200 OK` - All groups with their grants
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-read capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = USER_GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = ListDto<UserGroupDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Read)
        .await?;

    let groups = UserGroupService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(ListDto::new(groups))))
}

/// Get one permission group by id.
///
/// # Access Control
/// - `userGroup:read`
///
/// # Returns
/// - `200 OK` - The group
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-read capability
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = USER_GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "The group", body = DataDto<UserGroupDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Read)
        .await?;

    let group = UserGroupService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(group))))
}

/// Update a permission group.
///
/// Passing `permissions` replaces the group's grants wholesale.
///
/// # Access Control
/// - `userGroup:update`
///
/// # Returns
/// - `200 OK` - Updated group
/// - `400 Bad Request` - Unknown resource/action name, or name already taken
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-update capability
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = USER_GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id")
    ),
    request_body = UpdateUserGroupDto,
    responses(
        (status = 200, description = "Updated group", body = DataDto<UserGroupDto>),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Update)
        .await?;

    let group = UserGroupService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(group))))
}

/// Deactivate a permission group.
///
/// The group is soft-deleted: memberships survive but the group no longer
/// contributes permissions.
///
/// # Access Control
/// - `userGroup:delete`
///
/// # Returns
/// - `200 OK` - Group deactivated
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-delete capability
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = USER_GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "Group deactivated", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Delete)
        .await?;

    UserGroupService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Group deactivated"))))
}

/// Add a user to a permission group.
///
/// # Access Control
/// - `userGroup:update`
///
/// # Returns
/// - `200 OK` - Membership created
/// - `400 Bad Request` - User is already a member
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-update capability
/// - `404 Not Found` - User or group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups/assign",
    tag = USER_GROUP_TAG,
    request_body = GroupMembershipDto,
    responses(
        (status = 200, description = "Membership created", body = MessageDto),
        (status = 400, description = "Already a member", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GroupMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Update)
        .await?;

    UserGroupService::new(&state.db).assign_user(payload).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User added to group"))))
}

/// Remove a user from a permission group.
///
/// # Access Control
/// - `userGroup:update`
///
/// # Returns
/// - `200 OK` - Membership removed
/// - `400 Bad Request` - User is not a member
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-update capability
/// - `404 Not Found` - User or group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups/remove",
    tag = USER_GROUP_TAG,
    request_body = GroupMembershipDto,
    responses(
        (status = 200, description = "Membership removed", body = MessageDto),
        (status = 400, description = "Not a member", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GroupMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Update)
        .await?;

    UserGroupService::new(&state.db).remove_user(payload).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User removed from group"))))
}

/// List the members of a group.
///
/// # Access Control
/// - `userGroup:read`
///
/// # Returns
/// - `200 OK` - Group members
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-read capability
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups/{id}/users",
    tag = USER_GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "Group members", body = ListDto<GroupUserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Read)
        .await?;

    let users = UserGroupService::new(&state.db).users_in_group(id).await?;

    Ok((StatusCode::OK, Json(ListDto::new(users))))
}

/// List the active groups a user belongs to.
///
/// # Access Control
/// - `userGroup:read`
///
/// # Returns
/// - `200 OK` - The user's active groups
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the userGroup-read capability
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}/groups",
    tag = USER_GROUP_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user's groups", body = ListDto<UserGroupDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::UserGroup, Action::Read)
        .await?;

    let groups = UserGroupService::new(&state.db).groups_of_user(id).await?;

    Ok((StatusCode::OK, Json(ListDto::new(groups))))
}
