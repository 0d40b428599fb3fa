//! Parking lot and spot domain models.
//!
//! Lots are floor plans with a price and an embedded collection of spots.
//! Each spot is a positioned rectangle with a type, an activation flag, and
//! a nullable occupant. Lot statistics are computed over the spot collection
//! rather than stored.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::parking::{
        CreateSpotDto, LotStatsDto, ParkingLotDto, ParkingLotSummaryDto, ParkingSpotDto,
        TypeCountDto, UpdateParkingLotDto,
    },
    server::error::AppError,
};

/// Classification of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotType {
    Standard,
    Compact,
    Handicap,
    Electric,
    Reserved,
}

impl SpotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotType::Standard => "standard",
            SpotType::Compact => "compact",
            SpotType::Handicap => "handicap",
            SpotType::Electric => "electric",
            SpotType::Reserved => "reserved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(SpotType::Standard),
            "compact" => Some(SpotType::Compact),
            "handicap" => Some(SpotType::Handicap),
            "electric" => Some(SpotType::Electric),
            "reserved" => Some(SpotType::Reserved),
            _ => None,
        }
    }
}

impl Default for SpotType {
    fn default() -> Self {
        SpotType::Standard
    }
}

/// A single positioned parking spot within a lot.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    pub id: i32,
    pub parking_lot_id: i32,
    /// Spot identifier, unique within its lot (e.g. "A1").
    pub spot_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub spot_type: SpotType,
    pub label: Option<String>,
    /// Inactive spots cannot be parked into and are excluded from statistics.
    pub is_active: bool,
    /// The occupying car, or `None` while the spot is free.
    pub current_car_id: Option<i32>,
    /// Occupant color denormalized for map rendering.
    pub current_car_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ParkingSpot {
    /// Converts an entity model to a spot domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The converted spot domain model
    /// - `Err(AppError::InternalError)` - The stored spot type is not a known
    ///   type name
    pub fn from_entity(entity: entity::parking_spot::Model) -> Result<Self, AppError> {
        let spot_type = SpotType::parse(&entity.spot_type).ok_or_else(|| {
            AppError::InternalError(format!("Unknown stored spot type: {}", entity.spot_type))
        })?;

        Ok(Self {
            id: entity.id,
            parking_lot_id: entity.parking_lot_id,
            spot_id: entity.spot_id,
            x: entity.x,
            y: entity.y,
            width: entity.width,
            height: entity.height,
            spot_type,
            label: entity.label,
            is_active: entity.is_active,
            current_car_id: entity.current_car_id,
            current_car_color: entity.current_car_color,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the spot domain model to a DTO for API responses.
    pub fn into_dto(self) -> ParkingSpotDto {
        ParkingSpotDto {
            id: self.id,
            spot_id: self.spot_id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            spot_type: self.spot_type.as_str().to_string(),
            label: self.label,
            is_active: self.is_active,
            current_car: self.current_car_id,
            current_car_color: self.current_car_color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.current_car_id.is_some()
    }

    /// Strips occupant details for viewers who may not see other residents'
    /// cars.
    pub fn redact_occupant(&mut self) {
        self.current_car_id = None;
        self.current_car_color = None;
    }
}

/// Parking lot with its embedded spot collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingLot {
    pub id: i32,
    /// Business key used in URLs and history rows (e.g. "P1").
    pub lot_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Relative path of the uploaded floor-plan image, if any.
    pub svg_path: Option<String>,
    /// Monthly price; payment amounts are derived from this at read time.
    pub price: f64,
    pub width: i32,
    pub height: i32,
    pub is_active: bool,
    pub spots: Vec<ParkingSpot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ParkingLot {
    /// Converts a lot row and its spot rows to a domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The lot row from the database
    /// - `spots` - The lot's spot rows
    ///
    /// # Returns
    /// - `Ok(ParkingLot)` - The converted lot domain model
    /// - `Err(AppError::InternalError)` - A spot row stores an unknown type
    pub fn from_entity(
        entity: entity::parking_lot::Model,
        spots: Vec<entity::parking_spot::Model>,
    ) -> Result<Self, AppError> {
        let spots = spots
            .into_iter()
            .map(ParkingSpot::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            lot_id: entity.lot_id,
            name: entity.name,
            description: entity.description,
            svg_path: entity.svg_path,
            price: entity.price,
            width: entity.width,
            height: entity.height,
            is_active: entity.is_active,
            spots,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the lot domain model to a DTO with derived spot counts.
    ///
    /// # Returns
    /// - `ParkingLotDto` - The lot with its spots, total count, and the count
    ///   of active free spots
    pub fn into_dto(self) -> ParkingLotDto {
        let total_spots = self.spots.len();
        let available_spots = self
            .spots
            .iter()
            .filter(|s| s.is_active && !s.is_occupied())
            .count();

        ParkingLotDto {
            id: self.id,
            lot_id: self.lot_id,
            name: self.name,
            description: self.description,
            svg_path: self.svg_path,
            price: self.price,
            width: self.width,
            height: self.height,
            is_active: self.is_active,
            parking_spots: self.spots.into_iter().map(|s| s.into_dto()).collect(),
            total_spots,
            available_spots,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the lot domain model to a summary DTO without the spot
    /// collection.
    pub fn into_summary_dto(self) -> ParkingLotSummaryDto {
        ParkingLotSummaryDto {
            id: self.id,
            lot_id: self.lot_id,
            name: self.name,
            description: self.description,
            price: self.price,
            width: self.width,
            height: self.height,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a parking lot.
#[derive(Debug, Clone)]
pub struct CreateParkingLotParam {
    pub lot_id: String,
    pub name: String,
    pub description: Option<String>,
    pub svg_path: Option<String>,
    pub price: f64,
    pub width: i32,
    pub height: i32,
}

/// Parameters for a partial lot update; `None` preserves the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateParkingLotParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub svg_path: Option<String>,
    pub price: Option<f64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl UpdateParkingLotParam {
    pub fn from_dto(dto: UpdateParkingLotDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            svg_path: dto.svg_path,
            price: dto.price,
            width: dto.width,
            height: dto.height,
        }
    }
}

/// Parameters for adding a spot to a lot.
#[derive(Debug, Clone)]
pub struct CreateSpotParam {
    pub spot_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub spot_type: SpotType,
    pub label: Option<String>,
    pub is_active: bool,
}

impl CreateSpotParam {
    /// Validates a spot-creation payload.
    ///
    /// # Arguments
    /// - `dto` - The spot-creation payload; type defaults to standard and the
    ///   activation flag to true
    ///
    /// # Returns
    /// - `Ok(CreateSpotParam)` - The validated parameters
    /// - `Err(AppError::BadRequest)` - Unknown spot type name
    pub fn from_dto(dto: CreateSpotDto) -> Result<Self, AppError> {
        let spot_type = match dto.spot_type {
            Some(ref value) => SpotType::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown spot type: {value}")))?,
            None => SpotType::default(),
        };

        Ok(Self {
            spot_id: dto.spot_id,
            x: dto.x,
            y: dto.y,
            width: dto.width,
            height: dto.height,
            spot_type,
            label: dto.label,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

/// Per-type total and free counts used in the statistics breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeCount {
    pub total: usize,
    pub available: usize,
}

/// Derived occupancy statistics for one lot.
#[derive(Debug, Clone, PartialEq)]
pub struct LotStats {
    pub total_spots: usize,
    pub active_spots: usize,
    pub occupied_spots: usize,
    pub available_spots: usize,
    /// Occupied share of active spots, in percent. 0.0 when the lot has no
    /// active spots.
    pub occupancy_rate: f64,
    pub type_breakdown: HashMap<SpotType, TypeCount>,
}

impl LotStats {
    /// Computes occupancy statistics over a lot's spot collection.
    ///
    /// Only active spots participate in occupancy and the per-type
    /// breakdown; `total_spots` counts every spot regardless of state.
    ///
    /// # Arguments
    /// - `spots` - The lot's full spot collection
    ///
    /// # Returns
    /// - `LotStats` - The derived statistics
    pub fn compute(spots: &[ParkingSpot]) -> Self {
        let total_spots = spots.len();
        let active: Vec<&ParkingSpot> = spots.iter().filter(|s| s.is_active).collect();
        let active_spots = active.len();
        let occupied_spots = active.iter().filter(|s| s.is_occupied()).count();
        let available_spots = active_spots - occupied_spots;

        let occupancy_rate = if active_spots == 0 {
            0.0
        } else {
            occupied_spots as f64 / active_spots as f64 * 100.0
        };

        let mut type_breakdown: HashMap<SpotType, TypeCount> = HashMap::new();
        for spot in &active {
            let entry = type_breakdown.entry(spot.spot_type).or_default();
            entry.total += 1;
            if !spot.is_occupied() {
                entry.available += 1;
            }
        }

        Self {
            total_spots,
            active_spots,
            occupied_spots,
            available_spots,
            occupancy_rate,
            type_breakdown,
        }
    }

    pub fn into_dto(self) -> LotStatsDto {
        LotStatsDto {
            total_spots: self.total_spots,
            active_spots: self.active_spots,
            occupied_spots: self.occupied_spots,
            available_spots: self.available_spots,
            occupancy_rate: self.occupancy_rate,
            type_breakdown: self
                .type_breakdown
                .into_iter()
                .map(|(spot_type, count)| {
                    (
                        spot_type.as_str().to_string(),
                        TypeCountDto {
                            total: count.total,
                            available: count.available,
                        },
                    )
                })
                .collect(),
        }
    }
}
