use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        auth::{AuthUserDto, LoginDto, RegisterDto, TokenResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new resident account.
///
/// Creates an account with a bcrypt-hashed password and immediately signs the
/// caller in, returning a bearer token. New accounts carry no permissions
/// until an administrator assigns them to a group.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (username, email, password, contact details)
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Missing username or password, or username/email taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = TokenResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let response = service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Sign in with username (or email) and password.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Credentials; `username` also accepts the account email
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Unknown identifier, wrong password, or inactive account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = TokenResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let response = service.login(payload).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get the authenticated caller's profile and resolved permissions.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Caller profile with flattened permission map
/// - `401 Unauthorized` - Missing, invalid, or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller profile", body = DataDto<AuthUserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(AuthService::me(auth_user)))))
}
