//! Payment service for monthly billing rows.
//!
//! Display amounts are never stored: every listing derives the amount from
//! the billed lot's current price, and the display date is the settlement
//! date for paid rows or the due date (one month after creation) otherwise.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::payment::{CreatePaymentDto, MarkPaidDto, PaymentDto},
    server::{
        data::{
            car::CarRepository, parking_lot::ParkingLotRepository, payment::PaymentRepository,
            user::UserRepository,
        },
        error::AppError,
        model::payment::{CreatePaymentParam, Payment, PaymentMethod},
    },
};

/// Service for listing, creating, and settling payments.
pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    /// Creates a new PaymentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PaymentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists payments joined to user and lot display data, newest first.
    ///
    /// # Arguments
    /// - `start_date` / `end_date` - Optional inclusive `YYYY-MM-DD` bounds
    ///   on the creation date
    ///
    /// # Returns
    /// - `Ok(Vec<PaymentDto>)` - Display lines
    /// - `Err(AppError::BadRequest)` - Malformed date bound
    pub async fn list(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<PaymentDto>, AppError> {
        let from = start_date
            .map(|raw| Self::parse_day_bound(raw, false))
            .transpose()?;
        let to = end_date
            .map(|raw| Self::parse_day_bound(raw, true))
            .transpose()?;

        let payments = PaymentRepository::new(self.db).list(from, to).await?;

        let user_ids: Vec<i32> = payments.iter().map(|p| p.user_id).collect();
        let lot_ids: Vec<i32> = payments.iter().map(|p| p.parking_lot_id).collect();

        let users: HashMap<i32, _> = UserRepository::new(self.db)
            .find_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let lots: HashMap<i32, _> = ParkingLotRepository::new(self.db)
            .find_by_ids_without_spots(lot_ids)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        Ok(payments
            .into_iter()
            .map(|payment| {
                let user = users.get(&payment.user_id);
                let lot = lots.get(&payment.parking_lot_id);

                payment.into_line_dto(
                    user.map(|u| u.full_name.clone()).unwrap_or_default(),
                    user.and_then(|u| u.apartment_number.clone()),
                    lot.map(|l| l.name.as_str()).unwrap_or("Unknown lot"),
                    lot.map(|l| l.price).unwrap_or(0.0),
                )
            })
            .collect())
    }

    /// Creates a pending billing row after checking its references.
    ///
    /// # Returns
    /// - `Ok(PaymentDto)` - The created row as a display line
    /// - `Err(AppError::NotFound)` - User, car, or lot does not exist
    pub async fn create(&self, dto: CreatePaymentDto) -> Result<PaymentDto, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(dto.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if CarRepository::new(self.db)
            .find_by_id(dto.car_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Car not found".to_string()));
        }
        if ParkingLotRepository::new(self.db)
            .find_by_id(dto.parking_lot_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Parking lot not found".to_string()));
        }

        let method = Self::parse_method(dto.payment_method.as_deref())?;

        let payment = PaymentRepository::new(self.db)
            .create(CreatePaymentParam {
                user_id: dto.user_id,
                car_id: dto.car_id,
                parking_lot_id: dto.parking_lot_id,
                method,
                notes: dto.notes,
            })
            .await?;

        self.line(payment).await
    }

    /// Settles a payment.
    ///
    /// Settlement moves the row irreversibly forward: settled rows (paid,
    /// cancelled, refunded) cannot be settled again and nothing moves a row
    /// back to pending.
    ///
    /// # Arguments
    /// - `id` - The payment to settle
    /// - `dto` - Reported method and transaction reference
    ///
    /// # Returns
    /// - `Ok(PaymentDto)` - The settled row as a display line
    /// - `Err(AppError::NotFound)` - No payment with that id
    /// - `Err(AppError::Conflict)` - Row is already settled
    pub async fn mark_paid(&self, id: i32, dto: MarkPaidDto) -> Result<PaymentDto, AppError> {
        let repo = PaymentRepository::new(self.db);

        let payment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if !payment.status.is_open() {
            return Err(AppError::Conflict("Payment is already settled".to_string()));
        }

        let method = dto
            .payment_method
            .as_deref()
            .map(|raw| {
                PaymentMethod::parse(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown payment method: {raw}")))
            })
            .transpose()?;

        let settled = repo
            .settle(id, method, dto.transaction_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        self.line(settled).await
    }

    /// Joins one payment to its user and lot display data.
    async fn line(&self, payment: Payment) -> Result<PaymentDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(payment.user_id)
            .await?;
        let lot = ParkingLotRepository::new(self.db)
            .find_by_id(payment.parking_lot_id)
            .await?;

        Ok(payment.into_line_dto(
            user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default(),
            user.and_then(|u| u.apartment_number),
            lot.as_ref().map(|l| l.name.as_str()).unwrap_or("Unknown lot"),
            lot.as_ref().map(|l| l.price).unwrap_or(0.0),
        ))
    }

    /// Parses a `YYYY-MM-DD` bound into the first or last instant of the day.
    fn parse_day_bound(raw: &str, end_of_day: bool) -> Result<DateTime<Utc>, AppError> {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("Invalid date: {raw}")))?;

        let time = if end_of_day {
            date.and_hms_opt(23, 59, 59)
        } else {
            date.and_hms_opt(0, 0, 0)
        }
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {raw}")))?;

        Ok(time.and_utc())
    }

    fn parse_method(raw: Option<&str>) -> Result<PaymentMethod, AppError> {
        match raw {
            Some(raw) => PaymentMethod::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown payment method: {raw}"))),
            None => Ok(PaymentMethod::default()),
        }
    }
}
