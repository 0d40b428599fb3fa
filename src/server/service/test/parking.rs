use super::*;

use crate::{
    model::parking::{ParkCarDataDto, ParkRequestDto, SetLotActiveDto},
    server::{
        data::{car::CarRepository, parking_spot::ParkingSpotRepository},
        error::AppError,
        service::parking::ParkingService,
    },
};
use test_utils::{builder::TestBuilder, factory};

fn park_dto(plate: &str, color: Option<&str>) -> ParkRequestDto {
    ParkRequestDto {
        car_data: ParkCarDataDto {
            license_plate: plate.to_string(),
            color: color.map(|c| c.to_string()),
            model: None,
        },
    }
}

/// Tests parking a registered car into a free spot.
///
/// Verifies both halves of the occupancy relationship and the open history
/// row are written.
///
/// Expected: spot occupied, car pointer set, one open history record
#[tokio::test]
async fn parks_car_into_free_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::car::CarFactory::new(db, user.id)
        .license_plate("AB-123-CD")
        .color("red")
        .build()
        .await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    let spot = factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;

    let actor = resident(user);
    let result = ParkingService::new(db)
        .park("P1", "A-01", park_dto("ab-123-cd", None), &actor)
        .await?;

    assert_eq!(result.car.id, car.id);
    assert_eq!(result.spot.current_car, Some(car.id));
    assert_eq!(result.spot.current_car_color.as_deref(), Some("red"));

    let taken = ParkingSpotRepository::new(db)
        .find_by_pk(spot.id)
        .await?
        .unwrap();
    assert_eq!(taken.current_car_id, Some(car.id));

    let parked = CarRepository::new(db).find_by_id(car.id).await?.unwrap();
    let current = parked.current_spot.unwrap();
    assert_eq!(current.lot_id, "P1");
    assert_eq!(current.spot_id, "A-01");

    let records = CarRepository::new(db).history_for_car(car.id).await?;
    assert_eq!(records.len(), 1);
    assert!(records[0].exit_time.is_none());

    Ok(())
}

/// Tests parking an unknown plate.
///
/// Expected: car registered under the caller with a normalized plate
#[tokio::test]
async fn registers_unknown_car_on_park() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;

    let actor = resident(user.clone());
    let result = ParkingService::new(db)
        .park("P1", "A-01", park_dto("  xy-987-zw ", Some("blue")), &actor)
        .await?;

    assert_eq!(result.car.license_plate, "XY-987-ZW");
    assert_eq!(result.car.owner_user_id, user.id);

    let registered = CarRepository::new(db)
        .find_by_plate("XY-987-ZW")
        .await?
        .unwrap();
    assert_eq!(registered.color.as_deref(), Some("blue"));

    Ok(())
}

/// Tests parking into an occupied spot.
///
/// Expected: Conflict, with the occupant unchanged
#[tokio::test]
async fn rejects_occupied_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let occupant = factory::create_car(db, user.id).await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    let spot = factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .occupied_by(occupant.id, None)
        .build()
        .await?;

    let actor = resident(user);
    let err = ParkingService::new(db)
        .park("P1", "A-01", park_dto("NEW-111", None), &actor)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    let unchanged = ParkingSpotRepository::new(db)
        .find_by_pk(spot.id)
        .await?
        .unwrap();
    assert_eq!(unchanged.current_car_id, Some(occupant.id));

    Ok(())
}

/// Tests parking a car that is already parked elsewhere.
///
/// Verifies the single-occupancy rule: the old spot is freed and the old
/// history row closed before the new spot is taken.
///
/// Expected: car holds only the new spot, one open history record
#[tokio::test]
async fn relocates_already_parked_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::car::CarFactory::new(db, user.id)
        .license_plate("AB-123-CD")
        .build()
        .await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    let first = factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-02")
        .build()
        .await?;

    let actor = resident(user);
    let service = ParkingService::new(db);

    service
        .park("P1", "A-01", park_dto("AB-123-CD", None), &actor)
        .await?;
    let result = service
        .park("P1", "A-02", park_dto("AB-123-CD", None), &actor)
        .await?;

    let freed = ParkingSpotRepository::new(db)
        .find_by_pk(first.id)
        .await?
        .unwrap();
    assert!(!freed.is_occupied());

    let car = CarRepository::new(db)
        .find_by_id(result.car.id)
        .await?
        .unwrap();
    assert_eq!(car.current_spot.unwrap().spot_id, "A-02");

    let records = CarRepository::new(db).history_for_car(car.id).await?;
    assert_eq!(records.len(), 2);
    let open: Vec<_> = records.iter().filter(|r| r.exit_time.is_none()).collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].spot_id, "A-02");

    Ok(())
}

/// Tests parking into an inactive lot.
///
/// Expected: NotFound, indistinguishable from a missing lot
#[tokio::test]
async fn hides_inactive_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .is_active(false)
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;

    let actor = resident(user);
    let err = ParkingService::new(db)
        .park("P1", "A-01", park_dto("AB-123-CD", None), &actor)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests removing the car from an occupied spot.
///
/// Expected: both halves cleared and the history row closed
#[tokio::test]
async fn removes_parked_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::car::CarFactory::new(db, user.id)
        .license_plate("AB-123-CD")
        .build()
        .await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    let spot = factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;

    let actor = resident(user);
    let service = ParkingService::new(db);
    service
        .park("P1", "A-01", park_dto("AB-123-CD", None), &actor)
        .await?;

    let result = service.remove("P1", "A-01").await?;

    assert!(result.spot.current_car.is_none());
    assert!(result.car.current_spot.is_none());

    let freed = ParkingSpotRepository::new(db)
        .find_by_pk(spot.id)
        .await?
        .unwrap();
    assert!(!freed.is_occupied());

    let records = CarRepository::new(db)
        .history_for_car(result.car.id)
        .await?;
    assert!(records[0].exit_time.is_some());

    Ok(())
}

/// Tests removing from a spot that is already free.
///
/// Expected: Conflict
#[tokio::test]
async fn rejects_remove_from_free_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;

    let err = ParkingService::new(db)
        .remove("P1", "A-01")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

/// Tests the ceiling on simultaneously active lots.
///
/// Expected: activating a fourth lot fails, re-activating an active one passes
#[tokio::test]
async fn enforces_active_lot_ceiling() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_lot(db).await?;
    factory::create_lot(db).await?;
    factory::create_lot(db).await?;
    let spare = factory::parking_lot::ParkingLotFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let service = ParkingService::new(db);

    let err = service
        .set_lot_active(SetLotActiveDto {
            id: spare.id,
            is_active: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Re-asserting an already active lot does not count against the ceiling
    let unchanged = service
        .set_lot_active(SetLotActiveDto {
            id: first.id,
            is_active: true,
        })
        .await?;
    assert!(unchanged.is_active);

    Ok(())
}

/// Tests that relocating a car does not change the occupied count.
///
/// A car is removed from one spot and parked into another; lot statistics
/// report the same number of occupied spots before and after.
///
/// Expected: occupied count 1 throughout, rate consistent
#[tokio::test]
async fn relocation_keeps_occupied_count_stable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::car::CarFactory::new(db, user.id)
        .license_plate("AB-123-CD")
        .build()
        .await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("L1")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A1")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A2")
        .build()
        .await?;

    let actor = resident(user);
    let service = ParkingService::new(db);

    service
        .park("L1", "A1", park_dto("AB-123-CD", None), &actor)
        .await?;
    let before = service.stats("L1").await?;

    service.remove("L1", "A1").await?;
    service
        .park("L1", "A2", park_dto("AB-123-CD", None), &actor)
        .await?;
    let after = service.stats("L1").await?;

    assert_eq!(before.occupied_spots, 1);
    assert_eq!(after.occupied_spots, 1);
    assert_eq!(after.available_spots, before.available_spots);
    assert_eq!(after.occupancy_rate, before.occupancy_rate);

    Ok(())
}

/// Tests statistics for an unknown lot.
///
/// Expected: NotFound
#[tokio::test]
async fn stats_for_unknown_lot_fail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ParkingService::new(db).stats("P9").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests occupant redaction for residents.
///
/// Verifies that a resident sees their own car on the map but not other
/// residents' cars, while staff see everything.
///
/// Expected: foreign occupant hidden for the resident, visible for staff
#[tokio::test]
async fn redacts_foreign_occupants_for_residents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let own_car = factory::create_car(db, viewer.id).await?;
    let foreign_car = factory::create_car(db, other.id).await?;
    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .occupied_by(own_car.id, Some("red"))
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-02")
        .occupied_by(foreign_car.id, Some("black"))
        .build()
        .await?;

    let service = ParkingService::new(db);

    let as_resident = service.get_lot("P1", &resident(viewer.clone())).await?;
    let own = &as_resident.parking_spots[0];
    let foreign = &as_resident.parking_spots[1];
    assert_eq!(own.current_car, Some(own_car.id));
    assert!(foreign.current_car.is_none());
    assert!(foreign.current_car_color.is_none());

    let as_staff = service.get_lot("P1", &staff(viewer)).await?;
    assert_eq!(as_staff.parking_spots[1].current_car, Some(foreign_car.id));

    Ok(())
}
