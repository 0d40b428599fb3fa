use crate::server::{data::user::UserRepository, error::AppError, model::user::CreateUserParam};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_active_by_identifier;
mod identifier_taken;
mod set_apartment_number;
