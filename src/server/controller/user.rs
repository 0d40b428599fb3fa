use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::permission::{Action, Resource},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every registered user.
///
/// # Access Control
/// - `user:read`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - All users
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the user-read capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = ListDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::User, Action::Read)
        .await?;

    let users = UserService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(ListDto::new(users))))
}

/// Create a user account administratively, with optional group assignments.
///
/// # Access Control
/// - `user:create`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Account data plus ids of groups to assign
///
/// # Returns
/// - `201 Created` - Created user
/// - `400 Bad Request` - Username or email already taken
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the user-create capability
/// - `404 Not Found` - A listed group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = DataDto<UserDto>),
        (status = 400, description = "Username or email already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::User, Action::Create)
        .await?;

    let user = UserService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(user))))
}
