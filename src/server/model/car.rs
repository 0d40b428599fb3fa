//! Car domain models and parameters.
//!
//! Cars belong to resident accounts and carry a denormalized snapshot of the
//! owner's contact details taken at creation time. A car's current parking
//! position is tracked by a nullable (lot, spot) pointer pair that is the
//! authoritative index for "where is this car parked".

use chrono::{DateTime, Utc};

use crate::model::car::{CarDto, CarHistoryDto, CurrentSpotDto, ParkingRecordDto};

/// The spot a car currently occupies, by business keys.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSpot {
    pub lot_id: String,
    pub spot_id: String,
}

/// Registered car with owner snapshot and current parking position.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    /// Unique, uppercase license plate.
    pub license_plate: String,
    pub color: Option<String>,
    pub model: Option<String>,
    /// Account that owns the car.
    pub owner_user_id: i32,
    /// Owner contact snapshot taken when the car was registered.
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub owner_apartment: Option<String>,
    /// Where the car is parked right now, if anywhere.
    pub current_spot: Option<CurrentSpot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Converts the car domain model to a DTO for API responses.
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            license_plate: self.license_plate,
            color: self.color,
            model: self.model,
            owner_user_id: self.owner_user_id,
            owner_name: self.owner_name,
            owner_contact: self.owner_contact,
            owner_apartment: self.owner_apartment,
            current_spot: self.current_spot.map(|spot| CurrentSpotDto {
                lot_id: spot.lot_id,
                spot_id: spot.spot_id,
            }),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a car domain model at the repository boundary.
    ///
    /// The pointer pair is only surfaced when both halves are present; a
    /// half-set pair is treated as not parked.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Car` - The converted car domain model
    pub fn from_entity(entity: entity::car::Model) -> Self {
        let current_spot = match (entity.current_lot_id, entity.current_spot_id) {
            (Some(lot_id), Some(spot_id)) => Some(CurrentSpot { lot_id, spot_id }),
            _ => None,
        };

        Self {
            id: entity.id,
            license_plate: entity.license_plate,
            color: entity.color,
            model: entity.model,
            owner_user_id: entity.owner_user_id,
            owner_name: entity.owner_name,
            owner_contact: entity.owner_contact,
            owner_apartment: entity.owner_apartment,
            current_spot,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the car currently occupies a parking spot.
    pub fn is_parked(&self) -> bool {
        self.current_spot.is_some()
    }
}

/// Parameters for registering a car.
///
/// The owner snapshot fields are filled from the owning user's account at
/// creation time.
#[derive(Debug, Clone)]
pub struct CreateCarParam {
    pub license_plate: String,
    pub color: Option<String>,
    pub model: Option<String>,
    pub owner_user_id: i32,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub owner_apartment: Option<String>,
}

/// Parameters for a partial car update; `None` preserves the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarParam {
    pub license_plate: Option<String>,
    pub color: Option<String>,
    pub model: Option<String>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub owner_apartment: Option<String>,
}

/// One entry of a car's append-only parking log.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingRecord {
    pub lot_id: String,
    pub spot_id: String,
    pub entry_time: DateTime<Utc>,
    /// `None` while the stay is still open.
    pub exit_time: Option<DateTime<Utc>>,
}

impl ParkingRecord {
    pub fn from_entity(entity: entity::parking_history::Model) -> Self {
        Self {
            lot_id: entity.lot_id,
            spot_id: entity.spot_id,
            entry_time: entity.entry_time,
            exit_time: entity.exit_time,
        }
    }

    pub fn into_dto(self) -> ParkingRecordDto {
        ParkingRecordDto {
            lot_id: self.lot_id,
            spot_id: self.spot_id,
            entry_time: self.entry_time,
            exit_time: self.exit_time,
        }
    }
}

/// A car's identity together with its full parking log, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CarHistory {
    pub license_plate: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub records: Vec<ParkingRecord>,
}

impl CarHistory {
    pub fn into_dto(self) -> CarHistoryDto {
        CarHistoryDto {
            license_plate: self.license_plate,
            model: self.model,
            color: self.color,
            parking_history: self.records.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

/// Normalizes a license plate for storage and lookup.
///
/// Plates are compared case-insensitively and without surrounding
/// whitespace, so both sides of every comparison go through this.
pub fn normalize_license_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}
