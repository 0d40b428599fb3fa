use chrono::{Duration, Utc};

use crate::server::{
    data::parking_request::ParkingRequestRepository,
    error::AppError,
    model::request::{CreateParkingRequestParam, RequestStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod decide;
mod list;

/// A valid week-long request for the given user, car, and spot.
fn request_param(user_id: i32, car_id: i32, parking_spot_id: i32) -> CreateParkingRequestParam {
    let start_date = Utc::now() + Duration::days(1);
    CreateParkingRequestParam {
        user_id,
        car_id,
        parking_spot_id,
        start_date,
        end_date: start_date + Duration::days(7),
        notes: None,
    }
}
