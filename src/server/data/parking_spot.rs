//! Parking spot data repository for database operations.
//!
//! Provides the `ParkingSpotRepository` for managing spots and their
//! occupancy columns. The occupancy writes here are the spot-side half of
//! the parking relationship; the car-side pointer is written by the car
//! repository inside the same transaction.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::parking::{CreateSpotParam, ParkingSpot},
};

/// Repository providing database operations for parking spots.
pub struct ParkingSpotRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParkingSpotRepository<'a, C> {
    /// Creates a new ParkingSpotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ParkingSpotRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new free spot into a lot.
    ///
    /// # Arguments
    /// - `parking_lot_id` - Primary key of the owning lot
    /// - `param` - Validated spot parameters
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The created spot
    /// - `Err(AppError)` - Database error, including unique violation on the
    ///   (lot, spot) pair
    pub async fn create(
        &self,
        parking_lot_id: i32,
        param: CreateSpotParam,
    ) -> Result<ParkingSpot, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::ParkingSpot::insert(entity::parking_spot::ActiveModel {
            parking_lot_id: ActiveValue::Set(parking_lot_id),
            spot_id: ActiveValue::Set(param.spot_id),
            x: ActiveValue::Set(param.x),
            y: ActiveValue::Set(param.y),
            width: ActiveValue::Set(param.width),
            height: ActiveValue::Set(param.height),
            spot_type: ActiveValue::Set(param.spot_type.as_str().to_string()),
            label: ActiveValue::Set(param.label),
            is_active: ActiveValue::Set(param.is_active),
            current_car_id: ActiveValue::Set(None),
            current_car_color: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        ParkingSpot::from_entity(entity)
    }

    /// Finds a spot within a lot by its in-lot identifier.
    ///
    /// # Arguments
    /// - `parking_lot_id` - Primary key of the owning lot
    /// - `spot_id` - In-lot spot identifier (e.g. "A1")
    ///
    /// # Returns
    /// - `Ok(Some(ParkingSpot))` - Spot found
    /// - `Ok(None)` - No such spot in the lot
    /// - `Err(AppError)` - Database error during query
    pub async fn find(
        &self,
        parking_lot_id: i32,
        spot_id: &str,
    ) -> Result<Option<ParkingSpot>, AppError> {
        let entity = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingLotId.eq(parking_lot_id))
            .filter(entity::parking_spot::Column::SpotId.eq(spot_id))
            .one(self.db)
            .await?;

        entity.map(ParkingSpot::from_entity).transpose()
    }

    /// Finds a spot by primary key.
    pub async fn find_by_pk(&self, id: i32) -> Result<Option<ParkingSpot>, AppError> {
        let entity = entity::prelude::ParkingSpot::find_by_id(id).one(self.db).await?;

        entity.map(ParkingSpot::from_entity).transpose()
    }

    /// Lists a lot's spots ordered by in-lot identifier.
    ///
    /// # Arguments
    /// - `parking_lot_id` - Primary key of the owning lot
    /// - `active_only` - When true, inactive spots are excluded
    pub async fn list_for_lot(
        &self,
        parking_lot_id: i32,
        active_only: bool,
    ) -> Result<Vec<ParkingSpot>, AppError> {
        let mut query = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingLotId.eq(parking_lot_id));
        if active_only {
            query = query.filter(entity::parking_spot::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::parking_spot::Column::SpotId)
            .all(self.db)
            .await?;

        entities.into_iter().map(ParkingSpot::from_entity).collect()
    }

    /// Checks whether a lot already contains a spot with the given identifier.
    pub async fn spot_exists(&self, parking_lot_id: i32, spot_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingLotId.eq(parking_lot_id))
            .filter(entity::parking_spot::Column::SpotId.eq(spot_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a spot row.
    ///
    /// # Returns
    /// - `Ok(true)` - Spot found and deleted
    /// - `Ok(false)` - No spot with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingSpot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks a spot occupied by a car.
    ///
    /// # Arguments
    /// - `id` - The spot's primary key
    /// - `car_id` - The occupying car
    /// - `car_color` - The car's color, denormalized for map rendering
    pub async fn occupy(
        &self,
        id: i32,
        car_id: i32,
        car_color: Option<&str>,
    ) -> Result<(), DbErr> {
        entity::prelude::ParkingSpot::update_many()
            .filter(entity::parking_spot::Column::Id.eq(id))
            .col_expr(
                entity::parking_spot::Column::CurrentCarId,
                sea_orm::sea_query::Expr::value(car_id),
            )
            .col_expr(
                entity::parking_spot::Column::CurrentCarColor,
                sea_orm::sea_query::Expr::value(car_color),
            )
            .col_expr(
                entity::parking_spot::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks a spot free.
    pub async fn vacate(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ParkingSpot::update_many()
            .filter(entity::parking_spot::Column::Id.eq(id))
            .col_expr(
                entity::parking_spot::Column::CurrentCarId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::parking_spot::Column::CurrentCarColor,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::parking_spot::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Frees every spot occupied by a car, across all lots.
    ///
    /// One authoritative UPDATE enforces the single-occupancy invariant: a
    /// car occupies at most one spot system-wide, and any stale occupancy
    /// left behind by interrupted writes is cleared on the next park.
    ///
    /// # Arguments
    /// - `car_id` - The car whose occupancy is cleared
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of spots freed (normally 0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn clear_car_everywhere(&self, car_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParkingSpot::update_many()
            .filter(entity::parking_spot::Column::CurrentCarId.eq(car_id))
            .col_expr(
                entity::parking_spot::Column::CurrentCarId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::parking_spot::Column::CurrentCarColor,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::parking_spot::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
