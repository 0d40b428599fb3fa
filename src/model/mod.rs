//! API data transfer objects.
//!
//! Request and response types for every HTTP endpoint. All DTOs derive serde
//! traits plus `utoipa::ToSchema` for OpenAPI documentation, and serialize
//! with camelCase field names to match the public API contract.

pub mod api;
pub mod auth;
pub mod car;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod request;
pub mod user;
pub mod user_group;
