//! Axum route configuration and OpenAPI documentation.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, car, notification, parking, payment, request, user, user_group},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    auth::register,
    auth::login,
    auth::me,
    user::get_users,
    user::create_user,
    user_group::create_group,
    user_group::get_groups,
    user_group::get_group,
    user_group::update_group,
    user_group::delete_group,
    user_group::assign_user,
    user_group::remove_user,
    user_group::get_group_users,
    user_group::get_user_groups,
    car::get_own_cars,
    car::get_all_cars,
    car::create_car,
    car::get_car,
    car::get_car_by_plate,
    car::update_car,
    car::delete_car,
    car::get_car_history,
    parking::get_lots,
    parking::get_lot_summaries,
    parking::create_lot,
    parking::get_lot,
    parking::update_lot,
    parking::set_lot_active,
    parking::get_spots,
    parking::create_spot,
    parking::delete_spot,
    parking::park_car,
    parking::remove_car,
    parking::get_lot_stats,
    parking::get_car_in_spot,
    parking::get_cars_in_lot,
    payment::get_payments,
    payment::create_payment,
    payment::mark_paid,
    request::create_request,
    request::get_requests,
    request::get_own_requests,
    request::decide_request,
    notification::get_notifications,
    notification::mark_notification_read,
))]
struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `upload_dir` - Directory served under `/uploads` for lot layout assets
///
/// # Returns
/// - `Router<AppState>` - Router with all API routes, docs, and layers
pub fn router(upload_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route("/api/users/{id}/groups", get(user_group::get_user_groups))
        .route(
            "/api/groups",
            get(user_group::get_groups).post(user_group::create_group),
        )
        .route(
            "/api/groups/{id}",
            get(user_group::get_group)
                .put(user_group::update_group)
                .delete(user_group::delete_group),
        )
        .route("/api/groups/assign", post(user_group::assign_user))
        .route("/api/groups/remove", post(user_group::remove_user))
        .route("/api/groups/{id}/users", get(user_group::get_group_users))
        .route("/api/cars", get(car::get_own_cars).post(car::create_car))
        .route("/api/cars/all", get(car::get_all_cars))
        .route(
            "/api/cars/{id}",
            get(car::get_car).put(car::update_car).delete(car::delete_car),
        )
        .route("/api/cars/plate/{plate}", get(car::get_car_by_plate))
        .route("/api/cars/{id}/history", get(car::get_car_history))
        .route(
            "/api/parking/lots",
            get(parking::get_lots).post(parking::create_lot),
        )
        .route("/api/parking/lots/summary", get(parking::get_lot_summaries))
        .route("/api/parking/lots/active", post(parking::set_lot_active))
        .route(
            "/api/parking/lots/{lot_id}",
            get(parking::get_lot).put(parking::update_lot),
        )
        .route(
            "/api/parking/lots/{lot_id}/spots",
            get(parking::get_spots).post(parking::create_spot),
        )
        .route(
            "/api/parking/lots/{lot_id}/stats",
            get(parking::get_lot_stats),
        )
        .route("/api/parking/lots/{lot_id}/cars", get(parking::get_cars_in_lot))
        .route(
            "/api/parking/lots/{lot_id}/spots/{spot_id}",
            delete(parking::delete_spot),
        )
        .route(
            "/api/parking/lots/{lot_id}/spots/{spot_id}/park",
            post(parking::park_car),
        )
        .route(
            "/api/parking/lots/{lot_id}/spots/{spot_id}/remove",
            post(parking::remove_car),
        )
        .route(
            "/api/parking/lots/{lot_id}/spots/{spot_id}/car",
            get(parking::get_car_in_spot),
        )
        .route(
            "/api/payments",
            get(payment::get_payments).post(payment::create_payment),
        )
        .route("/api/payments/{id}/mark-paid", post(payment::mark_paid))
        .route(
            "/api/requests",
            get(request::get_requests).post(request::create_request),
        )
        .route("/api/requests/mine", get(request::get_own_requests))
        .route("/api/requests/{id}/status", put(request::decide_request))
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/{id}/read",
            put(notification::mark_notification_read),
        )
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
