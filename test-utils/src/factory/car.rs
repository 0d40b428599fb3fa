//! Car factory for creating registered test cars.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, owner.id)
///     .license_plate("ABC-123")
///     .color("red")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    owner_user_id: i32,
    license_plate: String,
    color: Option<String>,
    model: Option<String>,
    current_spot: Option<(String, String)>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - license_plate: `"PLATE{id}"` where id is auto-incremented
    /// - color, model: `None`
    /// - not parked anywhere
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_user_id` - The owning user's id
    ///
    /// # Returns
    /// - `CarFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_user_id,
            license_plate: format!("PLATE{}", id),
            color: None,
            model: None,
            current_spot: None,
        }
    }

    /// Sets the license plate.
    ///
    /// # Arguments
    /// - `license_plate` - Unique plate, stored as given
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    /// Sets the color.
    ///
    /// # Arguments
    /// - `color` - Car color
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the model.
    ///
    /// # Arguments
    /// - `model` - Car model
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Marks the car as currently parked.
    ///
    /// # Arguments
    /// - `lot_id` - Public lot identifier
    /// - `spot_id` - Spot identifier within the lot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn parked_at(mut self, lot_id: impl Into<String>, spot_id: impl Into<String>) -> Self {
        self.current_spot = Some((lot_id.into(), spot_id.into()));
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();
        let (current_lot_id, current_spot_id) = match self.current_spot {
            Some((lot, spot)) => (Some(lot), Some(spot)),
            None => (None, None),
        };

        entity::car::ActiveModel {
            id: ActiveValue::NotSet,
            license_plate: ActiveValue::Set(self.license_plate),
            color: ActiveValue::Set(self.color),
            model: ActiveValue::Set(self.model),
            owner_user_id: ActiveValue::Set(self.owner_user_id),
            owner_name: ActiveValue::Set(None),
            owner_contact: ActiveValue::Set(None),
            owner_apartment: ActiveValue::Set(None),
            current_lot_id: ActiveValue::Set(current_lot_id),
            current_spot_id: ActiveValue::Set(current_spot_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values for the given owner.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_user_id` - The owning user's id
///
/// # Returns
/// - `Ok(entity::car::Model)` - Created car entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_car(
    db: &DatabaseConnection,
    owner_user_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, owner_user_id).build().await
}
