//! Car management service.
//!
//! Enforces the ownership rules around cars: residents manage their own
//! cars, staff (anyone holding the user-read capability) see everything.
//! Owner snapshot updates propagate to the owner's other cars and to the
//! account's apartment number so the denormalized views stay consistent.

use sea_orm::DatabaseConnection;

use crate::{
    model::car::{CarDto, CarHistoryDto, CreateCarDto, UpdateCarDto},
    server::{
        data::{car::CarRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::auth::AuthUser,
        model::car::{normalize_license_plate, Car, CarHistory, CreateCarParam, UpdateCarParam},
    },
};

/// Service for car registration, updates, and history.
pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    /// Creates a new CarService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CarService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's own cars.
    pub async fn list_own(&self, actor: &AuthUser) -> Result<Vec<CarDto>, AppError> {
        let cars = CarRepository::new(self.db)
            .list_by_owner(actor.user.id)
            .await?;

        Ok(cars.into_iter().map(|c| c.into_dto()).collect())
    }

    /// Lists every registered car. Callers are staff-gated at the controller.
    pub async fn list_all(&self) -> Result<Vec<CarDto>, AppError> {
        let cars = CarRepository::new(self.db).list_all().await?;

        Ok(cars.into_iter().map(|c| c.into_dto()).collect())
    }

    /// Gets a car by id, visible to its owner and to staff.
    ///
    /// # Returns
    /// - `Ok(CarDto)` - The car
    /// - `Err(AppError::NotFound)` - No car with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is neither owner nor
    ///   staff
    pub async fn get(&self, id: i32, actor: &AuthUser) -> Result<CarDto, AppError> {
        let car = CarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Self::check_visible(&car, actor, "read")?;

        Ok(car.into_dto())
    }

    /// Gets a car by license plate, visible to its owner and to staff.
    ///
    /// The plate is normalized before lookup, so lowercase and padded input
    /// still matches.
    pub async fn get_by_plate(&self, plate: &str, actor: &AuthUser) -> Result<CarDto, AppError> {
        let plate = normalize_license_plate(plate);

        let car = CarRepository::new(self.db)
            .find_by_plate(&plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Self::check_visible(&car, actor, "read")?;

        Ok(car.into_dto())
    }

    /// Registers a car owned by the caller.
    ///
    /// The owner snapshot is taken from the caller's account: name, phone
    /// (falling back to email), and apartment number.
    ///
    /// # Arguments
    /// - `dto` - Car payload
    /// - `actor` - The authenticated owner
    ///
    /// # Returns
    /// - `Ok(CarDto)` - The registered car
    /// - `Err(AppError::Conflict)` - License plate already registered
    pub async fn create(&self, dto: CreateCarDto, actor: &AuthUser) -> Result<CarDto, AppError> {
        let repo = CarRepository::new(self.db);
        let plate = normalize_license_plate(&dto.license_plate);

        if plate.is_empty() {
            return Err(AppError::BadRequest("License plate is required".to_string()));
        }

        if repo.plate_exists(&plate).await? {
            return Err(AppError::Conflict(
                "A car with this license plate already exists".to_string(),
            ));
        }

        let owner = &actor.user;
        let car = repo
            .create(CreateCarParam {
                license_plate: plate,
                color: dto.color,
                model: dto.model,
                owner_user_id: owner.id,
                owner_name: Some(owner.full_name.clone()),
                owner_contact: owner
                    .phone_number
                    .clone()
                    .or_else(|| Some(owner.email.clone())),
                owner_apartment: owner.apartment_number.clone(),
            })
            .await?;

        Ok(car.into_dto())
    }

    /// Applies a partial update to a car, owner or staff only.
    ///
    /// Owner snapshot changes propagate to every car of the same owner, and
    /// a new apartment number is written back to the owner's account.
    ///
    /// # Arguments
    /// - `id` - The car to update
    /// - `dto` - Fields to change
    /// - `actor` - The authenticated caller
    ///
    /// # Returns
    /// - `Ok(CarDto)` - The updated car
    /// - `Err(AppError::NotFound)` - No car with that id
    /// - `Err(AppError::Conflict)` - New plate already registered to another car
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateCarDto,
        actor: &AuthUser,
    ) -> Result<CarDto, AppError> {
        let repo = CarRepository::new(self.db);

        let car = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Self::check_visible(&car, actor, "update")?;

        let license_plate = match dto.license_plate {
            Some(plate) => {
                let plate = normalize_license_plate(&plate);
                if plate != car.license_plate && repo.plate_exists(&plate).await? {
                    return Err(AppError::Conflict(
                        "A car with this license plate already exists".to_string(),
                    ));
                }
                Some(plate)
            }
            None => None,
        };

        let param = UpdateCarParam {
            license_plate,
            color: dto.car_color,
            model: dto.car_model,
            owner_name: dto.owner_name,
            owner_contact: dto.contact_info,
            owner_apartment: dto.apartment,
        };

        let updated = repo
            .update(id, param.clone())
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        // Keep the owner's other cars and account in sync with the snapshot
        repo.propagate_owner_snapshot(
            updated.owner_user_id,
            param.owner_name.as_deref(),
            param.owner_contact.as_deref(),
            param.owner_apartment.as_deref(),
        )
        .await?;
        if let Some(ref apartment) = param.owner_apartment {
            UserRepository::new(self.db)
                .set_apartment_number(updated.owner_user_id, apartment)
                .await?;
        }

        Ok(updated.into_dto())
    }

    /// Deletes a car, owner only.
    ///
    /// # Returns
    /// - `Ok(())` - Car deleted
    /// - `Err(AppError::NotFound)` - No car with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller does not own the car
    /// - `Err(AppError::Conflict)` - Car currently occupies a spot
    pub async fn delete(&self, id: i32, actor: &AuthUser) -> Result<(), AppError> {
        let repo = CarRepository::new(self.db);

        let car = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        if car.owner_user_id != actor.user.id {
            return Err(AuthError::AccessDenied {
                resource: "car",
                action: "delete",
            }
            .into());
        }

        if car.is_parked() {
            return Err(AppError::Conflict(
                "Car is currently parked; remove it from its spot first".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Gets a car's parking history, visible to its owner and to staff.
    pub async fn history(&self, id: i32, actor: &AuthUser) -> Result<CarHistoryDto, AppError> {
        let repo = CarRepository::new(self.db);

        let car = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Self::check_visible(&car, actor, "read")?;

        let records = repo.history_for_car(car.id).await?;

        Ok(CarHistory {
            license_plate: car.license_plate,
            model: car.model,
            color: car.color,
            records,
        }
        .into_dto())
    }

    /// Owner-or-staff visibility gate.
    fn check_visible(car: &Car, actor: &AuthUser, action: &'static str) -> Result<(), AppError> {
        if car.owner_user_id == actor.user.id || actor.is_staff() {
            return Ok(());
        }

        Err(AuthError::AccessDenied {
            resource: "car",
            action,
        }
        .into())
    }
}
