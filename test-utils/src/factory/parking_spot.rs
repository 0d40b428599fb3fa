//! Parking spot factory for creating test spots.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test spots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_spot::ParkingSpotFactory;
///
/// let spot = ParkingSpotFactory::new(&db, lot.id)
///     .spot_id("A-01")
///     .spot_type("electric")
///     .occupied_by(car.id, Some("red"))
///     .build()
///     .await?;
/// ```
pub struct ParkingSpotFactory<'a> {
    db: &'a DatabaseConnection,
    parking_lot_id: i32,
    spot_id: String,
    spot_type: String,
    is_active: bool,
    current_car_id: Option<i32>,
    current_car_color: Option<String>,
}

impl<'a> ParkingSpotFactory<'a> {
    /// Creates a new ParkingSpotFactory with default values.
    ///
    /// Defaults:
    /// - spot_id: `"S{id}"` where id is auto-incremented
    /// - spot_type: `"standard"`
    /// - is_active: `true`
    /// - unoccupied
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `parking_lot_id` - Database id of the containing lot
    ///
    /// # Returns
    /// - `ParkingSpotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, parking_lot_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            parking_lot_id,
            spot_id: format!("S{}", id),
            spot_type: "standard".to_string(),
            is_active: true,
            current_car_id: None,
            current_car_color: None,
        }
    }

    /// Sets the spot identifier within the lot.
    ///
    /// # Arguments
    /// - `spot_id` - Identifier unique within the lot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn spot_id(mut self, spot_id: impl Into<String>) -> Self {
        self.spot_id = spot_id.into();
        self
    }

    /// Sets the spot type.
    ///
    /// # Arguments
    /// - `spot_type` - One of the wire type names, e.g. `"compact"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn spot_type(mut self, spot_type: impl Into<String>) -> Self {
        self.spot_type = spot_type.into();
        self
    }

    /// Sets the active flag.
    ///
    /// # Arguments
    /// - `is_active` - Whether the spot is usable
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Marks the spot as occupied by a car.
    ///
    /// # Arguments
    /// - `car_id` - The occupying car's id
    /// - `car_color` - Display color snapshot, if any
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn occupied_by(mut self, car_id: i32, car_color: Option<&str>) -> Self {
        self.current_car_id = Some(car_id);
        self.current_car_color = car_color.map(|c| c.to_string());
        self
    }

    /// Builds and inserts the spot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parking_spot::Model)` - Created spot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking_spot::Model, DbErr> {
        let now = Utc::now();
        entity::parking_spot::ActiveModel {
            id: ActiveValue::NotSet,
            parking_lot_id: ActiveValue::Set(self.parking_lot_id),
            spot_id: ActiveValue::Set(self.spot_id),
            x: ActiveValue::Set(0.0),
            y: ActiveValue::Set(0.0),
            width: ActiveValue::Set(40.0),
            height: ActiveValue::Set(80.0),
            spot_type: ActiveValue::Set(self.spot_type),
            label: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            current_car_id: ActiveValue::Set(self.current_car_id),
            current_car_color: ActiveValue::Set(self.current_car_color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active standard spot in the given lot.
///
/// # Arguments
/// - `db` - Database connection
/// - `parking_lot_id` - Database id of the containing lot
///
/// # Returns
/// - `Ok(entity::parking_spot::Model)` - Created spot entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_spot(
    db: &DatabaseConnection,
    parking_lot_id: i32,
) -> Result<entity::parking_spot::Model, DbErr> {
    ParkingSpotFactory::new(db, parking_lot_id).build().await
}
