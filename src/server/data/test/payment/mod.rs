use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::payment::{CreatePaymentParam, PaymentMethod, PaymentStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod settle;
