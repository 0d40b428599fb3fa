use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto},
        request::{CreateParkingRequestDto, ParkingRequestDto, UpdateRequestStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::permission::{Action, Resource},
        service::request::RequestService,
        state::AppState,
    },
};

/// Tag for grouping parking request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// File a parking request for one of the caller's cars.
///
/// The request is flagged as waiting when the target spot is occupied at
/// filing time.
///
/// # Access Control
/// - Any authenticated user; the car must belong to the caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Car, spot, and requested date range
///
/// # Returns
/// - `201 Created` - Filed request in pending state
/// - `400 Bad Request` - End date not after start date
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Car belongs to another user
/// - `404 Not Found` - Car or spot does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateParkingRequestDto,
    responses(
        (status = 201, description = "Filed request", body = DataDto<ParkingRequestDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Car or spot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateParkingRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let request = RequestService::new(&state.db)
        .create(payload, &auth_user)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(request))))
}

/// List every parking request.
///
/// # Access Control
/// - `parkingRequest:read`
///
/// # Returns
/// - `200 OK` - All requests
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingRequest-read capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "All requests", body = ListDto<ParkingRequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingRequest, Action::Read)
        .await?;

    let requests = RequestService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(ListDto::new(requests))))
}

/// List the caller's own parking requests.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's requests
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests/mine",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "The caller's requests", body = ListDto<ParkingRequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let requests = RequestService::new(&state.db).list_own(&auth_user).await?;

    Ok((StatusCode::OK, Json(ListDto::new(requests))))
}

/// Approve or reject a pending request.
///
/// The requester is notified of the decision.
///
/// # Access Control
/// - `parkingRequest:update`
///
/// # Returns
/// - `200 OK` - Decided request
/// - `400 Bad Request` - Status not `approved`/`rejected`, or already decided
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingRequest-update capability
/// - `404 Not Found` - No request with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/requests/{id}/status",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request id")
    ),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Decided request", body = DataDto<ParkingRequestDto>),
        (status = 400, description = "Invalid decision or already decided", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRequestStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingRequest, Action::Update)
        .await?;

    let request = RequestService::new(&state.db)
        .decide(id, payload, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(request))))
}
