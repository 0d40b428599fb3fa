//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and converted to DTOs at the controller boundary.

pub mod car;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod permission;
pub mod request;
pub mod user;
pub mod user_group;
