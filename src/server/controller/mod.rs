//! HTTP request handlers.
//!
//! Controllers authenticate the caller through the auth guard, convert
//! request DTOs into service parameters, invoke the service layer, and wrap
//! results in the standard response envelopes.

pub mod auth;
pub mod car;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod request;
pub mod user;
pub mod user_group;
