//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Wrapping multi-step occupancy writes in transactions

pub mod auth;
pub mod car;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod request;
pub mod user;
pub mod user_group;

#[cfg(test)]
mod test;
