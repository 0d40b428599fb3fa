//! Payment domain models and parameters.
//!
//! Payments are monthly billing rows tied to a user, a car, and a lot. No
//! amount is stored: the display amount is derived from the lot's current
//! price when the row is read, so price changes apply to open bills
//! automatically.

use chrono::{DateTime, Months, Utc};

use crate::{model::payment::PaymentDto, server::error::AppError};

/// Lifecycle state of a payment.
///
/// Pending and overdue rows are open; paid, cancelled, and refunded rows are
/// settled. Settled rows never transition again, and no row ever moves back
/// to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "overdue" => Some(PaymentStatus::Overdue),
            "cancelled" => Some(PaymentStatus::Cancelled),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    /// Whether the payment can still be settled.
    pub fn is_open(&self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Overdue)
    }
}

/// How a payment was or will be settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    CreditCard,
    EWallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::EWallet => "e_wallet",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(PaymentMethod::Cash),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "credit_card" => Some(PaymentMethod::CreditCard),
            "e_wallet" => Some(PaymentMethod::EWallet),
            _ => None,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

/// Billing row for one month of parking.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub parking_lot_id: i32,
    /// Stamped when the payment is settled.
    pub payment_date: Option<DateTime<Utc>>,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Converts an entity model to a payment domain model at the repository
    /// boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Payment)` - The converted payment domain model
    /// - `Err(AppError::InternalError)` - The stored status or method is not
    ///   a known name
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        let status = PaymentStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!("Unknown stored payment status: {}", entity.status))
        })?;
        let method = PaymentMethod::parse(&entity.payment_method).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown stored payment method: {}",
                entity.payment_method
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            car_id: entity.car_id,
            parking_lot_id: entity.parking_lot_id,
            payment_date: entity.payment_date,
            status,
            method,
            transaction_id: entity.transaction_id,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// The date this payment is displayed under: the settlement date for paid
    /// rows, otherwise the due date one month after creation.
    pub fn display_date(&self) -> DateTime<Utc> {
        match self.payment_date {
            Some(date) => date,
            None => self
                .created_at
                .checked_add_months(Months::new(1))
                .unwrap_or(self.created_at),
        }
    }

    /// Joins the payment with its user and lot into a display line.
    ///
    /// # Arguments
    /// - `user_name` - Full name of the paying user
    /// - `apartment` - The user's apartment number, if recorded
    /// - `lot_name` - Name of the billed lot
    /// - `amount` - The lot's current price
    ///
    /// # Returns
    /// - `PaymentDto` - The joined display line
    pub fn into_line_dto(
        self,
        user_name: String,
        apartment: Option<String>,
        lot_name: &str,
        amount: f64,
    ) -> PaymentDto {
        let date = self.display_date();

        PaymentDto {
            id: self.id,
            user: user_name,
            apartment,
            description: format!("Monthly parking - {lot_name}"),
            amount,
            date,
            status: self.status.as_str().to_string(),
        }
    }
}

/// Parameters for creating a monthly billing row.
#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub user_id: i32,
    pub car_id: i32,
    pub parking_lot_id: i32,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}
