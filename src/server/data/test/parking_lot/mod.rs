use crate::server::{
    data::parking_lot::ParkingLotRepository,
    error::AppError,
    model::parking::{CreateParkingLotParam, UpdateParkingLotParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_lot_id;
mod list;
mod set_active;
mod update;
