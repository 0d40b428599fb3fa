//! Payment factory for creating test billing rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::payment::PaymentFactory;
///
/// let payment = PaymentFactory::new(&db, user.id, car.id, lot.id)
///     .status("paid")
///     .payment_date(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    car_id: i32,
    parking_lot_id: i32,
    status: String,
    payment_method: String,
    payment_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - status: `"pending"`
    /// - payment_method: `"cash"`
    /// - payment_date: `None`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - The billed user's id
    /// - `car_id` - The billed car's id
    /// - `parking_lot_id` - Database id of the billed lot
    ///
    /// # Returns
    /// - `PaymentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, car_id: i32, parking_lot_id: i32) -> Self {
        Self {
            db,
            user_id,
            car_id,
            parking_lot_id,
            status: "pending".to_string(),
            payment_method: "cash".to_string(),
            payment_date: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the status.
    ///
    /// # Arguments
    /// - `status` - Wire status name, e.g. `"paid"` or `"overdue"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the payment method.
    ///
    /// # Arguments
    /// - `payment_method` - Wire method name, e.g. `"bank_transfer"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    /// Sets the settlement date.
    ///
    /// # Arguments
    /// - `payment_date` - When the payment was settled
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn payment_date(mut self, payment_date: DateTime<Utc>) -> Self {
        self.payment_date = Some(payment_date);
        self
    }

    /// Sets the creation timestamp, useful for date-range listing tests.
    ///
    /// # Arguments
    /// - `created_at` - Row creation time
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the payment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::payment::Model)` - Created payment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            car_id: ActiveValue::Set(self.car_id),
            parking_lot_id: ActiveValue::Set(self.parking_lot_id),
            payment_date: ActiveValue::Set(self.payment_date),
            status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(self.payment_method),
            transaction_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending cash payment for the given user, car, and lot.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - The billed user's id
/// - `car_id` - The billed car's id
/// - `parking_lot_id` - Database id of the billed lot
///
/// # Returns
/// - `Ok(entity::payment::Model)` - Created payment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_payment(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
    parking_lot_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, user_id, car_id, parking_lot_id)
        .build()
        .await
}
