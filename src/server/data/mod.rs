//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over the connection type so the same queries run
//! against the shared pool or inside a transaction.

pub mod car;
pub mod notification;
pub mod parking_lot;
pub mod parking_request;
pub mod parking_spot;
pub mod payment;
pub mod user;
pub mod user_group;

#[cfg(test)]
mod test;
