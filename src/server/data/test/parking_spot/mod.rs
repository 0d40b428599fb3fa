use crate::server::{
    data::parking_spot::ParkingSpotRepository,
    error::AppError,
    model::parking::{CreateSpotParam, SpotType},
};
use test_utils::{builder::TestBuilder, factory};

mod clear_car_everywhere;
mod create;
mod delete;
mod list_for_lot;
mod occupy;
