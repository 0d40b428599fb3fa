//! Parking lot, spot, and occupancy service.
//!
//! Owns the occupancy state machine: a spot is Free while its occupant
//! column is null and Occupied otherwise, and a car occupies at most one
//! spot system-wide. Every occupancy write updates both halves of the
//! relationship (the spot's occupant column and the car's pointer columns)
//! inside one transaction, so readers never observe a half-written park or
//! remove.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::parking::{
        CreateParkingLotDto, CreateSpotDto, LotCarsDto, LotStatsDto, OccupiedSpotDto,
        ParkRequestDto, ParkResultDto, ParkingLotDto, ParkingLotSummaryDto, ParkingSpotDto,
        RemoveResultDto, SetLotActiveDto, SpotCarDto, UpdateParkingLotDto,
    },
    server::{
        data::{car::CarRepository, parking_lot::ParkingLotRepository, parking_spot::ParkingSpotRepository},
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            car::{normalize_license_plate, CreateCarParam, UpdateCarParam},
            parking::{CreateParkingLotParam, CreateSpotParam, LotStats, ParkingLot, UpdateParkingLotParam},
        },
    },
};

/// Upper bound on simultaneously active lots.
const MAX_ACTIVE_LOTS: u64 = 3;

/// Service for parking lots, spots, and the occupancy state machine.
pub struct ParkingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkingService<'a> {
    /// Creates a new ParkingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ParkingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active lots with their spots, redacted for the caller.
    pub async fn list_active_lots(&self, actor: &AuthUser) -> Result<Vec<ParkingLotDto>, AppError> {
        let mut lots = ParkingLotRepository::new(self.db).list(true).await?;

        self.redact_lots(&mut lots, actor).await?;

        Ok(lots.into_iter().map(|l| l.into_dto()).collect())
    }

    /// Lists every lot without spot collections.
    pub async fn list_lots_without_spots(&self) -> Result<Vec<ParkingLotSummaryDto>, AppError> {
        let lots = ParkingLotRepository::new(self.db).list_without_spots().await?;

        Ok(lots.into_iter().map(|l| l.into_summary_dto()).collect())
    }

    /// Gets one lot by business key with its spots, redacted for the caller.
    pub async fn get_lot(&self, lot_id: &str, actor: &AuthUser) -> Result<ParkingLotDto, AppError> {
        let mut lot = ParkingLotRepository::new(self.db)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        self.redact_lots(std::slice::from_mut(&mut lot), actor).await?;

        Ok(lot.into_dto())
    }

    /// Creates a lot.
    ///
    /// # Returns
    /// - `Ok(ParkingLotDto)` - The created lot
    /// - `Err(AppError::Conflict)` - Business key already taken
    pub async fn create_lot(&self, dto: CreateParkingLotDto) -> Result<ParkingLotDto, AppError> {
        let repo = ParkingLotRepository::new(self.db);

        if repo.lot_id_exists(&dto.lot_id).await? {
            return Err(AppError::Conflict(
                "A parking lot with this id already exists".to_string(),
            ));
        }

        let lot = repo
            .create(CreateParkingLotParam {
                lot_id: dto.lot_id,
                name: dto.name,
                description: dto.description,
                svg_path: dto.svg_path,
                price: dto.price,
                width: dto.width,
                height: dto.height,
            })
            .await?;

        Ok(lot.into_dto())
    }

    /// Applies a partial update to a lot.
    pub async fn update_lot(
        &self,
        id: i32,
        dto: UpdateParkingLotDto,
    ) -> Result<ParkingLotDto, AppError> {
        let lot = ParkingLotRepository::new(self.db)
            .update(id, UpdateParkingLotParam::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        Ok(lot.into_dto())
    }

    /// Sets a lot's active flag, enforcing the active-lot ceiling.
    ///
    /// # Returns
    /// - `Ok(ParkingLotDto)` - The updated lot
    /// - `Err(AppError::NotFound)` - No lot with that id
    /// - `Err(AppError::Conflict)` - Activation would exceed the ceiling
    pub async fn set_lot_active(&self, dto: SetLotActiveDto) -> Result<ParkingLotDto, AppError> {
        let repo = ParkingLotRepository::new(self.db);

        let lot = repo
            .find_by_id(dto.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        if dto.is_active && !lot.is_active && repo.count_active().await? >= MAX_ACTIVE_LOTS {
            return Err(AppError::Conflict(format!(
                "At most {MAX_ACTIVE_LOTS} parking lots can be active at once"
            )));
        }

        let updated = repo
            .set_active(dto.id, dto.is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        Ok(updated.into_dto())
    }

    /// Lists the active spots of an active lot, redacted for the caller.
    ///
    /// # Returns
    /// - `Ok(Vec<ParkingSpotDto>)` - Active spots
    /// - `Err(AppError::NotFound)` - Lot missing or inactive
    pub async fn list_spots(
        &self,
        lot_id: &str,
        actor: &AuthUser,
    ) -> Result<Vec<ParkingSpotDto>, AppError> {
        let lot = self.active_lot(lot_id).await?;

        let mut spots = ParkingSpotRepository::new(self.db)
            .list_for_lot(lot.id, true)
            .await?;

        let owned = self.owned_car_ids(actor).await?;
        for spot in &mut spots {
            if let Some(car_id) = spot.current_car_id {
                if !actor.is_staff() && !owned.contains(&car_id) {
                    spot.redact_occupant();
                }
            }
        }

        Ok(spots.into_iter().map(|s| s.into_dto()).collect())
    }

    /// Adds a spot to a lot.
    ///
    /// # Returns
    /// - `Ok(ParkingSpotDto)` - The created spot
    /// - `Err(AppError::NotFound)` - No lot with that business key
    /// - `Err(AppError::Conflict)` - Spot id already present in the lot
    pub async fn create_spot(
        &self,
        lot_id: &str,
        dto: CreateSpotDto,
    ) -> Result<ParkingSpotDto, AppError> {
        let param = CreateSpotParam::from_dto(dto)?;

        let lot = ParkingLotRepository::new(self.db)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot_repo = ParkingSpotRepository::new(self.db);

        if spot_repo.spot_exists(lot.id, &param.spot_id).await? {
            return Err(AppError::Conflict(
                "A spot with this id already exists in the lot".to_string(),
            ));
        }

        let spot = spot_repo.create(lot.id, param).await?;

        Ok(spot.into_dto())
    }

    /// Deletes a spot, vacating any parked car first.
    ///
    /// Runs in a transaction: the occupying car's pointer is cleared and its
    /// open history row closed before the spot row goes away.
    pub async fn delete_spot(&self, lot_id: &str, spot_id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let lot = ParkingLotRepository::new(&txn)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot_repo = ParkingSpotRepository::new(&txn);
        let spot = spot_repo
            .find(lot.id, spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if let Some(car_id) = spot.current_car_id {
            let car_repo = CarRepository::new(&txn);
            car_repo.clear_current_spot(car_id).await?;
            car_repo.close_open_history(car_id, chrono::Utc::now()).await?;
        }

        spot_repo.delete(spot.id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Parks a car into a free spot of an active lot.
    ///
    /// Resolves the car by normalized license plate, creating it under the
    /// caller's account when unknown. Before the spot is taken, one
    /// authoritative update frees any spot the car already occupies, so the
    /// car never holds two spots even if earlier state was left inconsistent.
    /// All writes happen in one transaction.
    ///
    /// # Arguments
    /// - `lot_id` - Business key of the lot
    /// - `spot_id` - In-lot spot identifier
    /// - `dto` - Car data submitted with the park
    /// - `actor` - The authenticated caller
    ///
    /// # Returns
    /// - `Ok(ParkResultDto)` - The parked car and updated spot
    /// - `Err(AppError::NotFound)` - Lot missing/inactive, or spot missing/inactive
    /// - `Err(AppError::Conflict)` - Spot already occupied
    pub async fn park(
        &self,
        lot_id: &str,
        spot_id: &str,
        dto: ParkRequestDto,
        actor: &AuthUser,
    ) -> Result<ParkResultDto, AppError> {
        let plate = normalize_license_plate(&dto.car_data.license_plate);
        if plate.is_empty() {
            return Err(AppError::BadRequest("License plate is required".to_string()));
        }

        let txn = self.db.begin().await?;

        let lot = ParkingLotRepository::new(&txn)
            .find_by_lot_id(lot_id)
            .await?
            .filter(|lot| lot.is_active)
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot_repo = ParkingSpotRepository::new(&txn);
        let spot = spot_repo
            .find(lot.id, spot_id)
            .await?
            .filter(|spot| spot.is_active)
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if spot.is_occupied() {
            return Err(AppError::Conflict(
                "Parking spot is already occupied".to_string(),
            ));
        }

        let car_repo = CarRepository::new(&txn);
        let car = match car_repo.find_by_plate(&plate).await? {
            Some(car) => {
                // Refresh the car's appearance when the park supplies it
                if dto.car_data.color.is_some() || dto.car_data.model.is_some() {
                    car_repo
                        .update(
                            car.id,
                            UpdateCarParam {
                                color: dto.car_data.color.clone(),
                                model: dto.car_data.model.clone(),
                                ..Default::default()
                            },
                        )
                        .await?
                        .unwrap_or(car)
                } else {
                    car
                }
            }
            None => {
                let owner = &actor.user;
                car_repo
                    .create(CreateCarParam {
                        license_plate: plate,
                        color: dto.car_data.color.clone(),
                        model: dto.car_data.model.clone(),
                        owner_user_id: owner.id,
                        owner_name: Some(owner.full_name.clone()),
                        owner_contact: owner
                            .phone_number
                            .clone()
                            .or_else(|| Some(owner.email.clone())),
                        owner_apartment: owner.apartment_number.clone(),
                    })
                    .await?
            }
        };

        let now = chrono::Utc::now();

        // A car occupies at most one spot; free any it still holds
        let freed = spot_repo.clear_car_everywhere(car.id).await?;
        if freed > 0 {
            car_repo.close_open_history(car.id, now).await?;
        }

        car_repo
            .append_history(car.id, &lot.lot_id, &spot.spot_id, now)
            .await?;
        spot_repo.occupy(spot.id, car.id, car.color.as_deref()).await?;
        car_repo
            .set_current_spot(car.id, &lot.lot_id, &spot.spot_id)
            .await?;

        let car = car_repo
            .find_by_id(car.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Car vanished during park".to_string()))?;
        let spot = spot_repo
            .find_by_pk(spot.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Spot vanished during park".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            lot = %lot.lot_id,
            spot = %spot.spot_id,
            car = %car.license_plate,
            "Car parked"
        );

        Ok(ParkResultDto {
            car: car.into_dto(),
            spot: spot.into_dto(),
        })
    }

    /// Removes the car from an occupied spot.
    ///
    /// Clears both halves of the relationship and stamps the exit time on
    /// the car's open history row, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(RemoveResultDto)` - The freed spot and the removed car
    /// - `Err(AppError::NotFound)` - Lot or spot missing
    /// - `Err(AppError::Conflict)` - Spot is already free
    pub async fn remove(&self, lot_id: &str, spot_id: &str) -> Result<RemoveResultDto, AppError> {
        let txn = self.db.begin().await?;

        let lot = ParkingLotRepository::new(&txn)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot_repo = ParkingSpotRepository::new(&txn);
        let spot = spot_repo
            .find(lot.id, spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let Some(car_id) = spot.current_car_id else {
            return Err(AppError::Conflict("Parking spot is already free".to_string()));
        };

        let car_repo = CarRepository::new(&txn);
        let now = chrono::Utc::now();

        car_repo.close_open_history(car_id, now).await?;
        car_repo.clear_current_spot(car_id).await?;
        spot_repo.vacate(spot.id).await?;

        let car = car_repo
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::InternalError("Car vanished during remove".to_string()))?;
        let spot = spot_repo
            .find_by_pk(spot.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Spot vanished during remove".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            lot = %lot.lot_id,
            spot = %spot.spot_id,
            car = %car.license_plate,
            "Car removed from spot"
        );

        Ok(RemoveResultDto {
            message: "Car removed from spot".to_string(),
            car: car.into_dto(),
            spot: spot.into_dto(),
        })
    }

    /// Computes occupancy statistics for one lot.
    pub async fn stats(&self, lot_id: &str) -> Result<LotStatsDto, AppError> {
        let lot = ParkingLotRepository::new(self.db)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        Ok(LotStats::compute(&lot.spots).into_dto())
    }

    /// Looks up the car parked in one spot.
    ///
    /// Occupant details are included only for staff and the car's owner;
    /// other callers learn just that the spot is occupied.
    pub async fn car_in_spot(
        &self,
        lot_id: &str,
        spot_id: &str,
        actor: &AuthUser,
    ) -> Result<SpotCarDto, AppError> {
        let lot = ParkingLotRepository::new(self.db)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let mut spot = ParkingSpotRepository::new(self.db)
            .find(lot.id, spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let Some(car_id) = spot.current_car_id else {
            return Ok(SpotCarDto {
                occupied: false,
                car: None,
                spot: spot.into_dto(),
            });
        };

        let car = CarRepository::new(self.db).find_by_id(car_id).await?;
        let visible = actor.is_staff()
            || car
                .as_ref()
                .is_some_and(|car| car.owner_user_id == actor.user.id);

        if !visible {
            spot.redact_occupant();
        }

        Ok(SpotCarDto {
            occupied: true,
            car: if visible { car.map(|c| c.into_dto()) } else { None },
            spot: spot.into_dto(),
        })
    }

    /// Lists the occupied spots of a lot with their cars, redacted for the
    /// caller.
    pub async fn cars_in_lot(&self, lot_id: &str, actor: &AuthUser) -> Result<LotCarsDto, AppError> {
        let lot = ParkingLotRepository::new(self.db)
            .find_by_lot_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let occupied: Vec<_> = lot.spots.iter().filter(|s| s.is_occupied()).collect();

        let car_ids: Vec<i32> = occupied.iter().filter_map(|s| s.current_car_id).collect();
        let cars = CarRepository::new(self.db).find_by_ids(car_ids).await?;

        let staff = actor.is_staff();
        let entries = occupied
            .iter()
            .map(|spot| {
                let car = spot
                    .current_car_id
                    .and_then(|id| cars.iter().find(|c| c.id == id));
                let visible =
                    staff || car.is_some_and(|car| car.owner_user_id == actor.user.id);

                OccupiedSpotDto {
                    spot_id: spot.spot_id.clone(),
                    car_id: visible.then_some(spot.current_car_id).flatten(),
                    car_color: if visible {
                        spot.current_car_color.clone()
                    } else {
                        None
                    },
                    license_plate: if visible {
                        car.map(|c| c.license_plate.clone())
                    } else {
                        None
                    },
                    updated_at: spot.updated_at,
                }
            })
            .collect();

        Ok(LotCarsDto {
            parking_lot_id: lot.lot_id,
            total_spots: lot.spots.len(),
            occupied_spots: occupied.len(),
            cars: entries,
        })
    }

    /// Loads a lot by business key, requiring it to be active.
    async fn active_lot(&self, lot_id: &str) -> Result<ParkingLot, AppError> {
        ParkingLotRepository::new(self.db)
            .find_by_lot_id(lot_id)
            .await?
            .filter(|lot| lot.is_active)
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))
    }

    /// Redacts occupant details on lots' spots for non-staff callers.
    async fn redact_lots(&self, lots: &mut [ParkingLot], actor: &AuthUser) -> Result<(), AppError> {
        if actor.is_staff() {
            return Ok(());
        }

        let owned = self.owned_car_ids(actor).await?;

        for lot in lots {
            for spot in &mut lot.spots {
                if let Some(car_id) = spot.current_car_id {
                    if !owned.contains(&car_id) {
                        spot.redact_occupant();
                    }
                }
            }
        }

        Ok(())
    }

    /// Ids of the cars the caller owns.
    async fn owned_car_ids(&self, actor: &AuthUser) -> Result<Vec<i32>, AppError> {
        if actor.is_staff() {
            return Ok(Vec::new());
        }

        let cars = CarRepository::new(self.db)
            .list_by_owner(actor.user.id)
            .await?;

        Ok(cars.into_iter().map(|c| c.id).collect())
    }
}
