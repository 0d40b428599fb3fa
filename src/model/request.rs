use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingRequestDto {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub parking_spot_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub approved_by: Option<i32>,
    pub approval_date: Option<DateTime<Utc>>,
    pub is_waiting: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParkingRequestDto {
    pub car_id: i32,
    pub parking_spot_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Staff decision on a pending request: `approved` or `rejected`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateRequestStatusDto {
    pub status: String,
    pub notes: Option<String>,
}
