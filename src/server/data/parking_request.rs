//! Parking request data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    error::AppError,
    model::request::{CreateParkingRequestParam, ParkingRequest, RequestStatus},
};

/// Repository providing database operations for parking requests.
pub struct ParkingRequestRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParkingRequestRepository<'a, C> {
    /// Creates a new ParkingRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ParkingRequestRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending request.
    ///
    /// # Arguments
    /// - `param` - Request parameters with a validated date range
    /// - `is_waiting` - Whether the requested spot was occupied at filing time
    ///
    /// # Returns
    /// - `Ok(ParkingRequest)` - The created request in pending state
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateParkingRequestParam,
        is_waiting: bool,
    ) -> Result<ParkingRequest, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::ParkingRequest::insert(entity::parking_request::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            car_id: ActiveValue::Set(param.car_id),
            parking_spot_id: ActiveValue::Set(param.parking_spot_id),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(param.notes),
            approved_by: ActiveValue::Set(None),
            approval_date: ActiveValue::Set(None),
            is_waiting: ActiveValue::Set(is_waiting),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        ParkingRequest::from_entity(entity)
    }

    /// Finds a request by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ParkingRequest>, AppError> {
        let entity = entity::prelude::ParkingRequest::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(ParkingRequest::from_entity).transpose()
    }

    /// Lists every request, newest first.
    pub async fn list_all(&self) -> Result<Vec<ParkingRequest>, AppError> {
        let entities = entity::prelude::ParkingRequest::find()
            .order_by_desc(entity::parking_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ParkingRequest::from_entity)
            .collect()
    }

    /// Lists one user's requests, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ParkingRequest>, AppError> {
        let entities = entity::prelude::ParkingRequest::find()
            .filter(entity::parking_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::parking_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ParkingRequest::from_entity)
            .collect()
    }

    /// Records a staff decision on a request.
    ///
    /// # Arguments
    /// - `id` - The request's primary key
    /// - `status` - The decided status (approved or rejected)
    /// - `notes` - Decision notes, replacing any existing notes when present
    /// - `approved_by` - The deciding staff user
    /// - `decided_at` - Decision timestamp
    ///
    /// # Returns
    /// - `Ok(Some(ParkingRequest))` - The decided request
    /// - `Ok(None)` - No request with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn decide(
        &self,
        id: i32,
        status: RequestStatus,
        notes: Option<String>,
        approved_by: i32,
        decided_at: DateTime<Utc>,
    ) -> Result<Option<ParkingRequest>, AppError> {
        let Some(request) = entity::prelude::ParkingRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::parking_request::ActiveModel = request.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        if let Some(notes) = notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        active_model.approved_by = ActiveValue::Set(Some(approved_by));
        active_model.approval_date = ActiveValue::Set(Some(decided_at));
        active_model.updated_at = ActiveValue::Set(decided_at);

        let updated = sea_orm::ActiveModelTrait::update(active_model, self.db).await?;

        Ok(Some(ParkingRequest::from_entity(updated)?))
    }
}
