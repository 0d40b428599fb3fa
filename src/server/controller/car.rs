use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto, MessageDto},
        car::{CarDto, CarHistoryDto, CreateCarDto, UpdateCarDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::permission::{Action, Resource},
        service::car::CarService,
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// List the caller's own cars.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The caller's cars
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "The caller's cars", body = ListDto<CarDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let cars = CarService::new(&state.db).list_own(&auth_user).await?;

    Ok((StatusCode::OK, Json(ListDto::new(cars))))
}

/// List every registered car.
///
/// # Access Control
/// - `car:read`
///
/// # Returns
/// - `200 OK` - All cars
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the car-read capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/all",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "All cars", body = ListDto<CarDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::Car, Action::Read)
        .await?;

    let cars = CarService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(ListDto::new(cars))))
}

/// Register a car owned by the caller.
///
/// The license plate is normalized (trimmed, uppercased) and must be unique
/// across all cars.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Registered car
/// - `400 Bad Request` - Missing plate, or plate already registered
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Registered car", body = DataDto<CarDto>),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let car = CarService::new(&state.db).create(payload, &auth_user).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(car))))
}

/// Get a car by id.
///
/// # Access Control
/// - The car's owner, or `user:read` (staff)
///
/// # Returns
/// - `200 OK` - The car
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is neither owner nor staff
/// - `404 Not Found` - No car with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car id")
    ),
    responses(
        (status = 200, description = "The car", body = DataDto<CarDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let car = CarService::new(&state.db).get(id, &auth_user).await?;

    Ok((StatusCode::OK, Json(DataDto::new(car))))
}

/// Look up a car by license plate.
///
/// The plate is normalized before lookup, so lowercase and padded input still
/// matches.
///
/// # Access Control
/// - The car's owner, or `user:read` (staff)
///
/// # Returns
/// - `200 OK` - The car
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is neither owner nor staff
/// - `404 Not Found` - No car with that plate
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/plate/{plate}",
    tag = CAR_TAG,
    params(
        ("plate" = String, Path, description = "License plate")
    ),
    responses(
        (status = 200, description = "The car", body = DataDto<CarDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_by_plate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plate): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let car = CarService::new(&state.db)
        .get_by_plate(&plate, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(car))))
}

/// Update a car.
///
/// Owner snapshot changes propagate to the owner's other cars, and a new
/// apartment number is written back to the owner's account.
///
/// # Access Control
/// - The car's owner, or `user:read` (staff)
///
/// # Returns
/// - `200 OK` - Updated car
/// - `400 Bad Request` - New plate already registered to another car
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is neither owner nor staff
/// - `404 Not Found` - No car with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car id")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Updated car", body = DataDto<CarDto>),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let car = CarService::new(&state.db)
        .update(id, payload, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(car))))
}

/// Delete a car.
///
/// A parked car must be removed from its spot first.
///
/// # Access Control
/// - The car's owner only
///
/// # Returns
/// - `200 OK` - Car deleted
/// - `400 Bad Request` - Car currently occupies a spot
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller does not own the car
/// - `404 Not Found` - No car with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car id")
    ),
    responses(
        (status = 200, description = "Car deleted", body = MessageDto),
        (status = 400, description = "Car is parked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    CarService::new(&state.db).delete(id, &auth_user).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Car deleted"))))
}

/// Get a car's parking history.
///
/// # Access Control
/// - The car's owner, or `user:read` (staff)
///
/// # Returns
/// - `200 OK` - The car's parking log, newest first
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is neither owner nor staff
/// - `404 Not Found` - No car with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/{id}/history",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car id")
    ),
    responses(
        (status = 200, description = "Parking history", body = DataDto<CarHistoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let history = CarService::new(&state.db).history(id, &auth_user).await?;

    Ok((StatusCode::OK, Json(DataDto::new(history))))
}
