//! Parking lot data repository for database operations.
//!
//! Provides the `ParkingLotRepository` for managing lots and loading them
//! with their embedded spot collections. Lots are addressed by their business
//! key (`lot_id`) at the API surface and by primary key internally.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::parking::{CreateParkingLotParam, ParkingLot, UpdateParkingLotParam},
};

/// Repository providing database operations for parking lots.
pub struct ParkingLotRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParkingLotRepository<'a, C> {
    /// Creates a new ParkingLotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ParkingLotRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active lot with no spots.
    ///
    /// # Arguments
    /// - `param` - Lot parameters
    ///
    /// # Returns
    /// - `Ok(ParkingLot)` - The created lot
    /// - `Err(AppError)` - Database error, including unique violation on the
    ///   business key
    pub async fn create(&self, param: CreateParkingLotParam) -> Result<ParkingLot, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::ParkingLot::insert(entity::parking_lot::ActiveModel {
            lot_id: ActiveValue::Set(param.lot_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            svg_path: ActiveValue::Set(param.svg_path),
            price: ActiveValue::Set(param.price),
            width: ActiveValue::Set(param.width),
            height: ActiveValue::Set(param.height),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        ParkingLot::from_entity(entity, Vec::new())
    }

    /// Finds a lot by its business key, with its full spot collection.
    ///
    /// # Arguments
    /// - `lot_id` - The lot's business key (e.g. "P1")
    ///
    /// # Returns
    /// - `Ok(Some(ParkingLot))` - Lot found with spots loaded
    /// - `Ok(None)` - No lot with that business key
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_lot_id(&self, lot_id: &str) -> Result<Option<ParkingLot>, AppError> {
        let lot = entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::LotId.eq(lot_id))
            .one(self.db)
            .await?;

        match lot {
            Some(lot) => Ok(Some(self.with_spots(lot).await?)),
            None => Ok(None),
        }
    }

    /// Finds a lot by primary key, with its full spot collection.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ParkingLot>, AppError> {
        let lot = entity::prelude::ParkingLot::find_by_id(id).one(self.db).await?;

        match lot {
            Some(lot) => Ok(Some(self.with_spots(lot).await?)),
            None => Ok(None),
        }
    }

    /// Lists lots with their spot collections, ordered by business key.
    ///
    /// # Arguments
    /// - `active_only` - When true, inactive lots are excluded
    ///
    /// # Returns
    /// - `Ok(Vec<ParkingLot>)` - Lots with spots loaded
    /// - `Err(AppError)` - Database error during query
    pub async fn list(&self, active_only: bool) -> Result<Vec<ParkingLot>, AppError> {
        let mut query = entity::prelude::ParkingLot::find();
        if active_only {
            query = query.filter(entity::parking_lot::Column::IsActive.eq(true));
        }

        let lots = query
            .order_by_asc(entity::parking_lot::Column::LotId)
            .all(self.db)
            .await?;

        let lot_ids: Vec<i32> = lots.iter().map(|l| l.id).collect();
        let spots = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingLotId.is_in(lot_ids))
            .order_by_asc(entity::parking_spot::Column::SpotId)
            .all(self.db)
            .await?;

        let mut by_lot: HashMap<i32, Vec<entity::parking_spot::Model>> = HashMap::new();
        for spot in spots {
            by_lot.entry(spot.parking_lot_id).or_default().push(spot);
        }

        lots.into_iter()
            .map(|lot| {
                let spots = by_lot.remove(&lot.id).unwrap_or_default();
                ParkingLot::from_entity(lot, spots)
            })
            .collect()
    }

    /// Lists every lot without loading spots, ordered by business key.
    ///
    /// Serves the lightweight listing used by management views.
    pub async fn list_without_spots(&self) -> Result<Vec<ParkingLot>, AppError> {
        let lots = entity::prelude::ParkingLot::find()
            .order_by_asc(entity::parking_lot::Column::LotId)
            .all(self.db)
            .await?;

        lots.into_iter()
            .map(|lot| ParkingLot::from_entity(lot, Vec::new()))
            .collect()
    }

    /// Loads lots by primary keys without spots, unordered.
    ///
    /// Used to join display data onto rows that reference lots by id.
    pub async fn find_by_ids_without_spots(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<ParkingLot>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let lots = entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        lots.into_iter()
            .map(|lot| ParkingLot::from_entity(lot, Vec::new()))
            .collect()
    }

    /// Checks whether a lot business key is already taken.
    pub async fn lot_id_exists(&self, lot_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::LotId.eq(lot_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the currently active lots.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a lot.
    ///
    /// # Arguments
    /// - `id` - The lot's primary key
    /// - `param` - Fields to change; `None` fields are preserved
    ///
    /// # Returns
    /// - `Ok(Some(ParkingLot))` - The updated lot with spots loaded
    /// - `Ok(None)` - No lot with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateParkingLotParam,
    ) -> Result<Option<ParkingLot>, AppError> {
        let Some(lot) = entity::prelude::ParkingLot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::parking_lot::ActiveModel = lot.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(svg_path) = param.svg_path {
            active_model.svg_path = ActiveValue::Set(Some(svg_path));
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(width) = param.width {
            active_model.width = ActiveValue::Set(width);
        }
        if let Some(height) = param.height {
            active_model.height = ActiveValue::Set(height);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = sea_orm::ActiveModelTrait::update(active_model, self.db).await?;

        Ok(Some(self.with_spots(updated).await?))
    }

    /// Sets a lot's active flag.
    ///
    /// The max-active-lots rule is enforced by the service before this runs.
    ///
    /// # Returns
    /// - `Ok(Some(ParkingLot))` - The updated lot with spots loaded
    /// - `Ok(None)` - No lot with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<ParkingLot>, AppError> {
        let Some(lot) = entity::prelude::ParkingLot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::parking_lot::ActiveModel = lot.into();
        active_model.is_active = ActiveValue::Set(is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = sea_orm::ActiveModelTrait::update(active_model, self.db).await?;

        Ok(Some(self.with_spots(updated).await?))
    }

    /// Loads a lot's spots and builds the domain model.
    async fn with_spots(&self, lot: entity::parking_lot::Model) -> Result<ParkingLot, AppError> {
        let spots = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingLotId.eq(lot.id))
            .order_by_asc(entity::parking_spot::Column::SpotId)
            .all(self.db)
            .await?;

        ParkingLot::from_entity(lot, spots)
    }
}
