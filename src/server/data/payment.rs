//! Payment data repository for database operations.
//!
//! Provides the `PaymentRepository` for monthly billing rows. Payments store
//! no amount; display amounts are derived from the lot's price at read time
//! by the service layer.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::payment::{CreatePaymentParam, Payment, PaymentMethod, PaymentStatus},
};

/// Repository providing database operations for payments.
pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    /// Creates a new PaymentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PaymentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending billing row.
    ///
    /// # Arguments
    /// - `param` - Billing parameters
    ///
    /// # Returns
    /// - `Ok(Payment)` - The created payment in pending state
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreatePaymentParam) -> Result<Payment, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::Payment::insert(entity::payment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            car_id: ActiveValue::Set(param.car_id),
            parking_lot_id: ActiveValue::Set(param.parking_lot_id),
            payment_date: ActiveValue::Set(None),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            payment_method: ActiveValue::Set(param.method.as_str().to_string()),
            transaction_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Payment::from_entity(entity)
    }

    /// Finds a payment by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, AppError> {
        let entity = entity::prelude::Payment::find_by_id(id).one(self.db).await?;

        entity.map(Payment::from_entity).transpose()
    }

    /// Lists payments, newest first, optionally bounded to an inclusive
    /// creation-date range.
    ///
    /// # Arguments
    /// - `from` - Inclusive lower bound on creation date, if any
    /// - `to` - Inclusive upper bound on creation date, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Payment>)` - Matching payments
    /// - `Err(AppError)` - Database error during query
    pub async fn list(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<Payment>, AppError> {
        let mut query = entity::prelude::Payment::find();
        if let Some(from) = from {
            query = query.filter(entity::payment::Column::CreatedAt.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::payment::Column::CreatedAt.lte(to));
        }

        let entities = query
            .order_by_desc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Payment::from_entity).collect()
    }

    /// Settles a payment: stamps the payment date and moves it to paid.
    ///
    /// The status transition rules are checked by the service before this
    /// runs; this method only performs the write.
    ///
    /// # Arguments
    /// - `id` - The payment's primary key
    /// - `method` - Settlement method, if the client reported one
    /// - `transaction_id` - External transaction reference, if any
    /// - `paid_at` - Settlement timestamp
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - The settled payment
    /// - `Ok(None)` - No payment with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn settle(
        &self,
        id: i32,
        method: Option<PaymentMethod>,
        transaction_id: Option<String>,
        paid_at: DateTime<Utc>,
    ) -> Result<Option<Payment>, AppError> {
        let Some(payment) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::payment::ActiveModel = payment.into();
        active_model.status = ActiveValue::Set(PaymentStatus::Paid.as_str().to_string());
        active_model.payment_date = ActiveValue::Set(Some(paid_at));
        if let Some(method) = method {
            active_model.payment_method = ActiveValue::Set(method.as_str().to_string());
        }
        if let Some(transaction_id) = transaction_id {
            active_model.transaction_id = ActiveValue::Set(Some(transaction_id));
        }
        active_model.updated_at = ActiveValue::Set(paid_at);

        let updated = sea_orm::ActiveModelTrait::update(active_model, self.db).await?;

        Ok(Some(Payment::from_entity(updated)?))
    }
}
