use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::car::{CreateCarParam, UpdateCarParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod current_spot;
mod delete;
mod history;
mod propagate_owner_snapshot;
mod update;
