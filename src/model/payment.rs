use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Billing line joined against user, car, and lot.
///
/// `amount` is derived from the lot's current price at read time rather than
/// stored on the payment row. `date` is the payment date for settled rows and
/// the due date (created_at + 1 month) otherwise.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i32,
    pub user: String,
    pub apartment: Option<String>,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub user_id: i32,
    pub car_id: i32,
    pub parking_lot_id: i32,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaidDto {
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}
