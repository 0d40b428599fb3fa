//! Parking request domain models.
//!
//! Residents file requests for a spot over a date range; staff approve or
//! reject them. Status changes notify the requester.

use chrono::{DateTime, Utc};

use crate::{
    model::request::{CreateParkingRequestDto, ParkingRequestDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Expired,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Cancelled => "cancelled",
            RequestStatus::Expired => "expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            "cancelled" => Some(RequestStatus::Cancelled),
            "expired" => Some(RequestStatus::Expired),
            _ => None,
        }
    }

    /// Parses a staff decision, which may only approve or reject.
    ///
    /// # Returns
    /// - `Ok(RequestStatus)` - `approved` or `rejected`
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse_decision(value: &str) -> Result<Self, AppError> {
        match Self::parse(value) {
            Some(status @ (RequestStatus::Approved | RequestStatus::Rejected)) => Ok(status),
            _ => Err(AppError::BadRequest(format!(
                "Status must be approved or rejected, got: {value}"
            ))),
        }
    }
}

/// A resident's request for a spot over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingRequest {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub parking_spot_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: RequestStatus,
    pub notes: Option<String>,
    /// Staff user who decided the request.
    pub approved_by: Option<i32>,
    pub approval_date: Option<DateTime<Utc>>,
    /// Set when the requested spot was occupied at filing time.
    pub is_waiting: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ParkingRequest {
    pub fn from_entity(entity: entity::parking_request::Model) -> Result<Self, AppError> {
        let status = RequestStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!("Unknown stored request status: {}", entity.status))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            car_id: entity.car_id,
            parking_spot_id: entity.parking_spot_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status,
            notes: entity.notes,
            approved_by: entity.approved_by,
            approval_date: entity.approval_date,
            is_waiting: entity.is_waiting,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ParkingRequestDto {
        ParkingRequestDto {
            id: self.id,
            user_id: self.user_id,
            car_id: self.car_id,
            parking_spot_id: self.parking_spot_id,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.as_str().to_string(),
            notes: self.notes,
            approved_by: self.approved_by,
            approval_date: self.approval_date,
            is_waiting: self.is_waiting,
            created_at: self.created_at,
        }
    }
}

/// Parameters for filing a parking request.
#[derive(Debug, Clone)]
pub struct CreateParkingRequestParam {
    pub user_id: i32,
    pub car_id: i32,
    pub parking_spot_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl CreateParkingRequestParam {
    /// Validates a request payload for the given requester.
    ///
    /// # Returns
    /// - `Ok(CreateParkingRequestParam)` - The date range is well ordered
    /// - `Err(AppError::BadRequest)` - End date not after start date
    pub fn from_dto(user_id: i32, dto: CreateParkingRequestDto) -> Result<Self, AppError> {
        if dto.end_date <= dto.start_date {
            return Err(AppError::BadRequest(
                "End date must be after start date".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            car_id: dto.car_id,
            parking_spot_id: dto.parking_spot_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            notes: dto.notes,
        })
    }
}
