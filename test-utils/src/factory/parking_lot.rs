//! Parking lot factory for creating test lots.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_lot::ParkingLotFactory;
///
/// let lot = ParkingLotFactory::new(&db)
///     .lot_id("north")
///     .price(75.0)
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct ParkingLotFactory<'a> {
    db: &'a DatabaseConnection,
    lot_id: String,
    name: String,
    price: f64,
    is_active: bool,
}

impl<'a> ParkingLotFactory<'a> {
    /// Creates a new ParkingLotFactory with default values.
    ///
    /// Defaults:
    /// - lot_id: `"lot{id}"` where id is auto-incremented
    /// - name: `"Lot {id}"`
    /// - price: `50.0`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ParkingLotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            lot_id: format!("lot{}", id),
            name: format!("Lot {}", id),
            price: 50.0,
            is_active: true,
        }
    }

    /// Sets the public lot identifier.
    ///
    /// # Arguments
    /// - `lot_id` - Unique lot identifier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn lot_id(mut self, lot_id: impl Into<String>) -> Self {
        self.lot_id = lot_id.into();
        self
    }

    /// Sets the display name.
    ///
    /// # Arguments
    /// - `name` - Lot display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the monthly price.
    ///
    /// # Arguments
    /// - `price` - Monthly price billed for a spot in this lot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the active flag.
    ///
    /// # Arguments
    /// - `is_active` - Whether the lot is visible and parkable
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the lot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parking_lot::Model)` - Created lot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking_lot::Model, DbErr> {
        let now = Utc::now();
        entity::parking_lot::ActiveModel {
            id: ActiveValue::NotSet,
            lot_id: ActiveValue::Set(self.lot_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            svg_path: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            width: ActiveValue::Set(800),
            height: ActiveValue::Set(600),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active lot with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::parking_lot::Model)` - Created lot entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_lot(db: &DatabaseConnection) -> Result<entity::parking_lot::Model, DbErr> {
    ParkingLotFactory::new(db).build().await
}
