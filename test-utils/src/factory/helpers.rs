//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active lot containing one active spot.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((lot, spot))` - Created lot and spot
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lot_with_spot(
    db: &DatabaseConnection,
) -> Result<(entity::parking_lot::Model, entity::parking_spot::Model), DbErr> {
    let lot = crate::factory::parking_lot::create_lot(db).await?;
    let spot = crate::factory::parking_spot::create_spot(db, lot.id).await?;

    Ok((lot, spot))
}

/// Creates a user who owns one registered car.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, car))` - Created owner and car
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_car(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::car::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let car = crate::factory::car::create_car(db, user.id).await?;

    Ok((user, car))
}
