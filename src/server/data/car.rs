//! Car data repository for database operations.
//!
//! Provides the `CarRepository` for managing registered cars, their current
//! parking pointers, and the append-only parking history log. The pointer
//! columns on the car row are the authoritative index for "where is this car
//! parked" and are always written inside the same transaction as the spot's
//! occupant column.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::car::{Car, CreateCarParam, ParkingRecord, UpdateCarParam};

/// Repository providing database operations for cars and parking history.
pub struct CarRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    /// Creates a new CarRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CarRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new car with its owner snapshot.
    ///
    /// The license plate must already be normalized by the caller.
    ///
    /// # Arguments
    /// - `param` - Car parameters including the owner contact snapshot
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car
    /// - `Err(DbErr)` - Database error, including unique violation on the
    ///   license plate
    pub async fn create(&self, param: CreateCarParam) -> Result<Car, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Car::insert(entity::car::ActiveModel {
            license_plate: ActiveValue::Set(param.license_plate),
            color: ActiveValue::Set(param.color),
            model: ActiveValue::Set(param.model),
            owner_user_id: ActiveValue::Set(param.owner_user_id),
            owner_name: ActiveValue::Set(param.owner_name),
            owner_contact: ActiveValue::Set(param.owner_contact),
            owner_apartment: ActiveValue::Set(param.owner_apartment),
            current_lot_id: ActiveValue::Set(None),
            current_spot_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Finds a car by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Finds a car by its normalized license plate.
    pub async fn find_by_plate(&self, license_plate: &str) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find()
            .filter(entity::car::Column::LicensePlate.eq(license_plate))
            .one(self.db)
            .await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Checks whether a normalized license plate is already registered.
    pub async fn plate_exists(&self, license_plate: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Car::find()
            .filter(entity::car::Column::LicensePlate.eq(license_plate))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads cars by a set of primary keys, unordered.
    ///
    /// Used to join car details onto occupied spots.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Car>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Lists the cars owned by one user, newest first.
    pub async fn list_by_owner(&self, owner_user_id: i32) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::Car::find()
            .filter(entity::car::Column::OwnerUserId.eq(owner_user_id))
            .order_by_desc(entity::car::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Lists every registered car, newest first.
    pub async fn list_all(&self) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::Car::find()
            .order_by_desc(entity::car::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Applies a partial update to a car.
    ///
    /// # Arguments
    /// - `id` - The car's primary key
    /// - `param` - Fields to change; `None` fields are preserved. The license
    ///   plate, when present, must already be normalized
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The updated car
    /// - `Ok(None)` - No car with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateCarParam) -> Result<Option<Car>, DbErr> {
        let Some(car) = entity::prelude::Car::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::car::ActiveModel = car.into();

        if let Some(license_plate) = param.license_plate {
            active_model.license_plate = ActiveValue::Set(license_plate);
        }
        if let Some(color) = param.color {
            active_model.color = ActiveValue::Set(Some(color));
        }
        if let Some(model) = param.model {
            active_model.model = ActiveValue::Set(Some(model));
        }
        if let Some(owner_name) = param.owner_name {
            active_model.owner_name = ActiveValue::Set(Some(owner_name));
        }
        if let Some(owner_contact) = param.owner_contact {
            active_model.owner_contact = ActiveValue::Set(Some(owner_contact));
        }
        if let Some(owner_apartment) = param.owner_apartment {
            active_model.owner_apartment = ActiveValue::Set(Some(owner_apartment));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = sea_orm::ActiveModelTrait::update(active_model, self.db).await?;

        Ok(Some(Car::from_entity(updated)))
    }

    /// Deletes a car row.
    ///
    /// # Returns
    /// - `Ok(true)` - Car found and deleted
    /// - `Ok(false)` - No car with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Points a car at the spot it now occupies.
    pub async fn set_current_spot(
        &self,
        car_id: i32,
        lot_id: &str,
        spot_id: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::Car::update_many()
            .filter(entity::car::Column::Id.eq(car_id))
            .col_expr(
                entity::car::Column::CurrentLotId,
                sea_orm::sea_query::Expr::value(lot_id),
            )
            .col_expr(
                entity::car::Column::CurrentSpotId,
                sea_orm::sea_query::Expr::value(spot_id),
            )
            .col_expr(
                entity::car::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears a car's current-spot pointer.
    pub async fn clear_current_spot(&self, car_id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::update_many()
            .filter(entity::car::Column::Id.eq(car_id))
            .col_expr(
                entity::car::Column::CurrentLotId,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::car::Column::CurrentSpotId,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::car::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Propagates an owner snapshot change to every car of one owner.
    ///
    /// Used when a car update carries new owner details so all of the owner's
    /// cars present the same contact snapshot.
    ///
    /// # Arguments
    /// - `owner_user_id` - The owning user
    /// - `owner_name` / `owner_contact` / `owner_apartment` - Fields to
    ///   propagate; `None` fields are left untouched
    pub async fn propagate_owner_snapshot(
        &self,
        owner_user_id: i32,
        owner_name: Option<&str>,
        owner_contact: Option<&str>,
        owner_apartment: Option<&str>,
    ) -> Result<(), DbErr> {
        if owner_name.is_none() && owner_contact.is_none() && owner_apartment.is_none() {
            return Ok(());
        }

        let mut update = entity::prelude::Car::update_many()
            .filter(entity::car::Column::OwnerUserId.eq(owner_user_id));

        if let Some(owner_name) = owner_name {
            update = update.col_expr(
                entity::car::Column::OwnerName,
                sea_orm::sea_query::Expr::value(owner_name),
            );
        }
        if let Some(owner_contact) = owner_contact {
            update = update.col_expr(
                entity::car::Column::OwnerContact,
                sea_orm::sea_query::Expr::value(owner_contact),
            );
        }
        if let Some(owner_apartment) = owner_apartment {
            update = update.col_expr(
                entity::car::Column::OwnerApartment,
                sea_orm::sea_query::Expr::value(owner_apartment),
            );
        }

        update
            .col_expr(
                entity::car::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Appends an open parking-history row for a car entering a spot.
    pub async fn append_history(
        &self,
        car_id: i32,
        lot_id: &str,
        spot_id: &str,
        entry_time: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::ParkingHistory::insert(entity::parking_history::ActiveModel {
            car_id: ActiveValue::Set(car_id),
            lot_id: ActiveValue::Set(lot_id.to_string()),
            spot_id: ActiveValue::Set(spot_id.to_string()),
            entry_time: ActiveValue::Set(entry_time),
            exit_time: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Stamps the exit time on a car's open history rows.
    ///
    /// Normally exactly one row is open; stamping all open rows also repairs
    /// any stragglers left by interrupted writes.
    pub async fn close_open_history(
        &self,
        car_id: i32,
        exit_time: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::ParkingHistory::update_many()
            .filter(entity::parking_history::Column::CarId.eq(car_id))
            .filter(entity::parking_history::Column::ExitTime.is_null())
            .col_expr(
                entity::parking_history::Column::ExitTime,
                sea_orm::sea_query::Expr::value(exit_time),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists a car's parking history, newest entry first.
    pub async fn history_for_car(&self, car_id: i32) -> Result<Vec<ParkingRecord>, DbErr> {
        let entities = entity::prelude::ParkingHistory::find()
            .filter(entity::parking_history::Column::CarId.eq(car_id))
            .order_by_desc(entity::parking_history::Column::EntryTime)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParkingRecord::from_entity)
            .collect())
    }
}
