use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference to the spot a car currently occupies.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSpotDto {
    pub lot_id: String,
    pub spot_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i32,
    pub license_plate: String,
    pub color: Option<String>,
    pub model: Option<String>,
    pub owner_user_id: i32,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub owner_apartment: Option<String>,
    pub current_spot: Option<CurrentSpotDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarDto {
    pub license_plate: String,
    pub color: Option<String>,
    pub model: Option<String>,
}

/// Partial car update; absent fields keep their current value.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarDto {
    pub license_plate: Option<String>,
    pub car_color: Option<String>,
    pub car_model: Option<String>,
    pub owner_name: Option<String>,
    pub contact_info: Option<String>,
    pub apartment: Option<String>,
}

/// One entry of a car's append-only parking log.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingRecordDto {
    pub lot_id: String,
    pub spot_id: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarHistoryDto {
    pub license_plate: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub parking_history: Vec<ParkingRecordDto>,
}
