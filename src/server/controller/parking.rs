use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto, MessageDto},
        parking::{
            CreateParkingLotDto, CreateSpotDto, LotCarsDto, LotStatsDto, ParkRequestDto,
            ParkResultDto, ParkingLotDto, ParkingLotSummaryDto, ParkingSpotDto, RemoveResultDto,
            SetLotActiveDto, SpotCarDto, UpdateParkingLotDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::permission::{Action, Resource},
        service::parking::ParkingService,
        state::AppState,
    },
};

/// Tag for grouping parking endpoints in OpenAPI documentation
pub static PARKING_TAG: &str = "parking";

/// List active parking lots with their spots.
///
/// Occupant details on spots are redacted for callers who are not staff and
/// do not own the occupying car.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Active lots with embedded spots
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots",
    tag = PARKING_TAG,
    responses(
        (status = 200, description = "Active lots", body = ListDto<ParkingLotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lots(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let lots = ParkingService::new(&state.db)
        .list_active_lots(&auth_user)
        .await?;

    Ok((StatusCode::OK, Json(ListDto::new(lots))))
}

/// List every lot, active or not, without the spot collections.
///
/// # Access Control
/// - `parkingLot:read`
///
/// # Returns
/// - `200 OK` - All lots as summaries
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingLot-read capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots/summary",
    tag = PARKING_TAG,
    responses(
        (status = 200, description = "All lots", body = ListDto<ParkingLotSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lot_summaries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingLot, Action::Read)
        .await?;

    let lots = ParkingService::new(&state.db).list_lots_without_spots().await?;

    Ok((StatusCode::OK, Json(ListDto::new(lots))))
}

/// Create a parking lot.
///
/// New lots start inactive; activation is a separate call bounded by the
/// active-lot ceiling.
///
/// # Access Control
/// - `parkingLot:create`
///
/// # Returns
/// - `201 Created` - Created lot
/// - `400 Bad Request` - Lot identifier already in use
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingLot-create capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/parking/lots",
    tag = PARKING_TAG,
    request_body = CreateParkingLotDto,
    responses(
        (status = 201, description = "Created lot", body = DataDto<ParkingLotDto>),
        (status = 400, description = "Lot identifier already in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateParkingLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingLot, Action::Create)
        .await?;

    let lot = ParkingService::new(&state.db).create_lot(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(lot))))
}

/// Get a lot with its spots by public lot identifier.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The lot
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No lot with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots/{lot_id}",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier")
    ),
    responses(
        (status = 200, description = "The lot", body = DataDto<ParkingLotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let lot = ParkingService::new(&state.db)
        .get_lot(&lot_id, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(lot))))
}

/// Update a lot's metadata by database id.
///
/// # Access Control
/// - `parkingLot:update`
///
/// # Returns
/// - `200 OK` - Updated lot
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingLot-update capability
/// - `404 Not Found` - No lot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/parking/lots/{lot_id}",
    tag = PARKING_TAG,
    params(
        ("lot_id" = i32, Path, description = "Lot database id")
    ),
    request_body = UpdateParkingLotDto,
    responses(
        (status = 200, description = "Updated lot", body = DataDto<ParkingLotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateParkingLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingLot, Action::Update)
        .await?;

    let lot = ParkingService::new(&state.db).update_lot(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(lot))))
}

/// Activate or deactivate a lot.
///
/// At most three lots may be active at once; activating a fourth is refused.
///
/// # Access Control
/// - `parkingLot:update`
///
/// # Returns
/// - `200 OK` - Lot with the new active flag
/// - `400 Bad Request` - Active-lot ceiling reached
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingLot-update capability
/// - `404 Not Found` - No lot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/parking/lots/active",
    tag = PARKING_TAG,
    request_body = SetLotActiveDto,
    responses(
        (status = 200, description = "Lot updated", body = DataDto<ParkingLotDto>),
        (status = 400, description = "Active-lot ceiling reached", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_lot_active(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetLotActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingLot, Action::Update)
        .await?;

    let lot = ParkingService::new(&state.db).set_lot_active(payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(lot))))
}

/// List the active spots of an active lot.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Active spots, occupants redacted where not visible
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Lot does not exist or is inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots/{lot_id}/spots",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier")
    ),
    responses(
        (status = 200, description = "Active spots", body = ListDto<ParkingSpotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spots(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let spots = ParkingService::new(&state.db)
        .list_spots(&lot_id, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(ListDto::new(spots))))
}

/// Add a spot to a lot.
///
/// # Access Control
/// - `parkingSpot:create`
///
/// # Returns
/// - `201 Created` - Created spot
/// - `400 Bad Request` - Unknown spot type, or spot identifier taken in this lot
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingSpot-create capability
/// - `404 Not Found` - No lot with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/parking/lots/{lot_id}/spots",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier")
    ),
    request_body = CreateSpotDto,
    responses(
        (status = 201, description = "Created spot", body = DataDto<ParkingSpotDto>),
        (status = 400, description = "Invalid spot data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<String>,
    Json(payload): Json<CreateSpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingSpot, Action::Create)
        .await?;

    let spot = ParkingService::new(&state.db)
        .create_spot(&lot_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(spot))))
}

/// Delete a spot from a lot.
///
/// An occupied spot is vacated first: the parked car's pointer is cleared
/// and its open history entry closed, atomically with the deletion.
///
/// # Access Control
/// - `parkingSpot:delete`
///
/// # Returns
/// - `200 OK` - Spot deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the parkingSpot-delete capability
/// - `404 Not Found` - Lot or spot does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/parking/lots/{lot_id}/spots/{spot_id}",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier"),
        ("spot_id" = String, Path, description = "Spot identifier within the lot")
    ),
    responses(
        (status = 200, description = "Spot deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Lot or spot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((lot_id, spot_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::ParkingSpot, Action::Delete)
        .await?;

    ParkingService::new(&state.db)
        .delete_spot(&lot_id, &spot_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Spot deleted"))))
}

/// Park a car into a spot.
///
/// The car is resolved by license plate and registered to the caller if it
/// does not exist yet. A car parked elsewhere is relocated: its previous spot
/// is freed in the same transaction.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Car and spot after parking
/// - `400 Bad Request` - Missing plate, or spot already occupied
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Lot or spot does not exist or is inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/parking/lots/{lot_id}/spots/{spot_id}/park",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier"),
        ("spot_id" = String, Path, description = "Spot identifier within the lot")
    ),
    request_body = ParkRequestDto,
    responses(
        (status = 200, description = "Car parked", body = DataDto<ParkResultDto>),
        (status = 400, description = "Spot occupied or invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot or spot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn park_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((lot_id, spot_id)): Path<(String, String)>,
    Json(payload): Json<ParkRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let result = ParkingService::new(&state.db)
        .park(&lot_id, &spot_id, payload, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(result))))
}

/// Remove the car parked in a spot.
///
/// Clears the spot, clears the car's pointer, and closes its open history
/// entry, all in one transaction.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Car and spot after removal
/// - `400 Bad Request` - Spot is already free
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Lot or spot does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/parking/lots/{lot_id}/spots/{spot_id}/remove",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier"),
        ("spot_id" = String, Path, description = "Spot identifier within the lot")
    ),
    responses(
        (status = 200, description = "Car removed", body = DataDto<RemoveResultDto>),
        (status = 400, description = "Spot is already free", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot or spot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((lot_id, spot_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let result = ParkingService::new(&state.db)
        .remove(&lot_id, &spot_id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(result))))
}

/// Get occupancy statistics for a lot.
///
/// Counts and the occupancy rate cover active spots only; the rate is 0 for
/// a lot with no active spots.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Lot statistics
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No lot with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots/{lot_id}/stats",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier")
    ),
    responses(
        (status = 200, description = "Lot statistics", body = DataDto<LotStatsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lot_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let stats = ParkingService::new(&state.db).stats(&lot_id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(stats))))
}

/// Look up the car parked in a spot.
///
/// The car payload is included only for staff and the car's owner; other
/// callers still learn whether the spot is occupied.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Occupancy of the spot
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Lot or spot does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots/{lot_id}/spots/{spot_id}/car",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier"),
        ("spot_id" = String, Path, description = "Spot identifier within the lot")
    ),
    responses(
        (status = 200, description = "Spot occupancy", body = DataDto<SpotCarDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot or spot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_in_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((lot_id, spot_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let result = ParkingService::new(&state.db)
        .car_in_spot(&lot_id, &spot_id, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(result))))
}

/// List the cars currently parked in a lot.
///
/// License plates are included only for entries the caller may see (staff,
/// or the caller's own cars).
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Occupied spots in the lot
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No lot with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parking/lots/{lot_id}/cars",
    tag = PARKING_TAG,
    params(
        ("lot_id" = String, Path, description = "Public lot identifier")
    ),
    responses(
        (status = 200, description = "Cars in the lot", body = DataDto<LotCarsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars_in_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let result = ParkingService::new(&state.db)
        .cars_in_lot(&lot_id, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(result))))
}
