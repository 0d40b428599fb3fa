use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::car::CarDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotDto {
    pub id: i32,
    pub spot_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub spot_type: String,
    pub label: Option<String>,
    pub is_active: bool,
    pub current_car: Option<i32>,
    pub current_car_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLotDto {
    pub id: i32,
    pub lot_id: String,
    pub name: String,
    pub description: Option<String>,
    pub svg_path: Option<String>,
    pub price: f64,
    pub width: i32,
    pub height: i32,
    pub is_active: bool,
    pub parking_spots: Vec<ParkingSpotDto>,
    pub total_spots: usize,
    pub available_spots: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lot listing entry without the embedded spot collection.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLotSummaryDto {
    pub id: i32,
    pub lot_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub width: i32,
    pub height: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParkingLotDto {
    pub lot_id: String,
    pub name: String,
    pub description: Option<String>,
    pub svg_path: Option<String>,
    pub price: f64,
    pub width: i32,
    pub height: i32,
}

/// Partial lot update; absent fields keep their current value.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParkingLotDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub svg_path: Option<String>,
    pub price: Option<f64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetLotActiveDto {
    pub id: i32,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpotDto {
    pub spot_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub spot_type: Option<String>,
    pub label: Option<String>,
    pub is_active: Option<bool>,
}

/// Car details submitted when parking into a spot.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkCarDataDto {
    pub license_plate: String,
    pub color: Option<String>,
    pub model: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkRequestDto {
    pub car_data: ParkCarDataDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkResultDto {
    pub car: CarDto,
    pub spot: ParkingSpotDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveResultDto {
    pub message: String,
    pub car: CarDto,
    pub spot: ParkingSpotDto,
}

/// Per-type spot counts in a lot's statistics breakdown.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TypeCountDto {
    pub total: usize,
    pub available: usize,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LotStatsDto {
    pub total_spots: usize,
    pub active_spots: usize,
    pub occupied_spots: usize,
    pub available_spots: usize,
    /// Occupied active spots over total active spots, in percent.
    /// 0.0 when the lot has no active spots.
    pub occupancy_rate: f64,
    pub type_breakdown: HashMap<String, TypeCountDto>,
}

/// Result of looking up the car parked in a single spot.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotCarDto {
    pub occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<CarDto>,
    pub spot: ParkingSpotDto,
}

/// One occupied spot in a lot-wide car listing.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedSpotDto {
    pub spot_id: String,
    pub car_id: Option<i32>,
    pub car_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LotCarsDto {
    pub parking_lot_id: String,
    pub total_spots: usize,
    pub occupied_spots: usize,
    pub cars: Vec<OccupiedSpotDto>,
}
