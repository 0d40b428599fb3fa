use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto},
        payment::{CreatePaymentDto, MarkPaidDto, PaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::permission::{Action, Resource},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// List payments, optionally bounded by creation date.
///
/// # Access Control
/// - `payment:read`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Optional inclusive `YYYY-MM-DD` bounds on the creation date
///
/// # Returns
/// - `200 OK` - Payment lines, newest first
/// - `400 Bad Request` - Malformed date bound
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the payment-read capability
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(
        ("startDate" = Option<String>, Query, description = "Inclusive lower creation-date bound (YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Inclusive upper creation-date bound (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Payment lines", body = ListDto<PaymentDto>),
        (status = 400, description = "Malformed date bound", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaymentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::Payment, Action::Read)
        .await?;

    let payments = PaymentService::new(&state.db)
        .list(params.start_date.as_deref(), params.end_date.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ListDto::new(payments))))
}

/// Create a pending billing row for a user, car, and lot.
///
/// # Access Control
/// - `payment:create`
///
/// # Returns
/// - `201 Created` - Created payment line
/// - `400 Bad Request` - Unknown payment method
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the payment-create capability
/// - `404 Not Found` - User, car, or lot does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Created payment", body = DataDto<PaymentDto>),
        (status = 400, description = "Invalid payment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "User, car, or lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::Payment, Action::Create)
        .await?;

    let payment = PaymentService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(payment))))
}

/// Settle a pending or overdue payment.
///
/// # Access Control
/// - `payment:update`
///
/// # Returns
/// - `200 OK` - Settled payment line
/// - `400 Bad Request` - Already settled, or unknown payment method
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Missing the payment-update capability
/// - `404 Not Found` - No payment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/payments/{id}/mark-paid",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment id")
    ),
    request_body = MarkPaidDto,
    responses(
        (status = 200, description = "Settled payment", body = DataDto<PaymentDto>),
        (status = 400, description = "Already settled or invalid method", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_paid(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MarkPaidDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(Resource::Payment, Action::Update)
        .await?;

    let payment = PaymentService::new(&state.db).mark_paid(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(payment))))
}
