//! Parking request service.
//!
//! Residents file requests for a spot over a date range; staff decide them.
//! A decision notifies the requester.

use sea_orm::DatabaseConnection;

use crate::{
    model::request::{CreateParkingRequestDto, ParkingRequestDto, UpdateRequestStatusDto},
    server::{
        data::{
            car::CarRepository, notification::NotificationRepository,
            parking_request::ParkingRequestRepository, parking_spot::ParkingSpotRepository,
        },
        error::{auth::AuthError, AppError},
        middleware::auth::AuthUser,
        model::{
            notification::{CreateNotificationParam, NotificationKind},
            request::{CreateParkingRequestParam, RequestStatus},
        },
    },
};

/// Service for filing and deciding parking requests.
pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    /// Creates a new RequestService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RequestService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request for one of the caller's cars.
    ///
    /// The request is flagged as waiting when the target spot is occupied at
    /// filing time.
    ///
    /// # Arguments
    /// - `dto` - Request payload
    /// - `actor` - The authenticated requester
    ///
    /// # Returns
    /// - `Ok(ParkingRequestDto)` - The filed request in pending state
    /// - `Err(AppError::NotFound)` - Car or spot does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Car is not the caller's
    /// - `Err(AppError::BadRequest)` - Malformed date range
    pub async fn create(
        &self,
        dto: CreateParkingRequestDto,
        actor: &AuthUser,
    ) -> Result<ParkingRequestDto, AppError> {
        let param = CreateParkingRequestParam::from_dto(actor.user.id, dto)?;

        let car = CarRepository::new(self.db)
            .find_by_id(param.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;
        if car.owner_user_id != actor.user.id {
            return Err(AuthError::AccessDenied {
                resource: "parkingRequest",
                action: "create",
            }
            .into());
        }

        let spot = ParkingSpotRepository::new(self.db)
            .find_by_pk(param.parking_spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let request = ParkingRequestRepository::new(self.db)
            .create(param, spot.is_occupied())
            .await?;

        Ok(request.into_dto())
    }

    /// Lists every request. Callers are staff-gated at the controller.
    pub async fn list_all(&self) -> Result<Vec<ParkingRequestDto>, AppError> {
        let requests = ParkingRequestRepository::new(self.db).list_all().await?;

        Ok(requests.into_iter().map(|r| r.into_dto()).collect())
    }

    /// Lists the caller's own requests.
    pub async fn list_own(&self, actor: &AuthUser) -> Result<Vec<ParkingRequestDto>, AppError> {
        let requests = ParkingRequestRepository::new(self.db)
            .list_for_user(actor.user.id)
            .await?;

        Ok(requests.into_iter().map(|r| r.into_dto()).collect())
    }

    /// Records a staff decision and notifies the requester.
    ///
    /// # Arguments
    /// - `id` - The request to decide
    /// - `dto` - The decision (`approved` or `rejected`) with optional notes
    /// - `actor` - The deciding staff user
    ///
    /// # Returns
    /// - `Ok(ParkingRequestDto)` - The decided request
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::Conflict)` - Request already decided
    /// - `Err(AppError::BadRequest)` - Status is not a valid decision
    pub async fn decide(
        &self,
        id: i32,
        dto: UpdateRequestStatusDto,
        actor: &AuthUser,
    ) -> Result<ParkingRequestDto, AppError> {
        let status = RequestStatus::parse_decision(&dto.status)?;
        let repo = ParkingRequestRepository::new(self.db);

        let request = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking request not found".to_string()))?;

        if request.status != RequestStatus::Pending {
            return Err(AppError::Conflict(
                "Parking request has already been decided".to_string(),
            ));
        }

        let decided = repo
            .decide(id, status, dto.notes, actor.user.id, chrono::Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Parking request not found".to_string()))?;

        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                user_id: decided.user_id,
                title: format!("Parking request {}", status.as_str()),
                message: format!("Your parking request #{id} has been {}", status.as_str()),
                kind: NotificationKind::RequestStatus,
                related_model: Some("parking_request".to_string()),
                related_id: Some(decided.id),
            })
            .await?;

        Ok(decided.into_dto())
    }
}
