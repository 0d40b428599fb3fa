use super::*;

/// Tests the system-wide occupancy sweep for one car.
///
/// Verifies that the sweep frees every spot the car holds, across lots,
/// and reports how many rows it touched.
///
/// Expected: both stale spots freed, the other car untouched
#[tokio::test]
async fn frees_every_spot_held_by_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let other = factory::create_car(db, user.id).await?;
    let first_lot = factory::create_lot(db).await?;
    let second_lot = factory::create_lot(db).await?;

    let stale_a = factory::parking_spot::ParkingSpotFactory::new(db, first_lot.id)
        .occupied_by(car.id, Some("red"))
        .build()
        .await?;
    let stale_b = factory::parking_spot::ParkingSpotFactory::new(db, second_lot.id)
        .occupied_by(car.id, Some("red"))
        .build()
        .await?;
    let foreign = factory::parking_spot::ParkingSpotFactory::new(db, first_lot.id)
        .occupied_by(other.id, None)
        .build()
        .await?;

    let repo = ParkingSpotRepository::new(db);

    let freed = repo.clear_car_everywhere(car.id).await?;
    assert_eq!(freed, 2);

    assert!(!repo.find_by_pk(stale_a.id).await?.unwrap().is_occupied());
    assert!(!repo.find_by_pk(stale_b.id).await?.unwrap().is_occupied());
    assert_eq!(
        repo.find_by_pk(foreign.id).await?.unwrap().current_car_id,
        Some(other.id)
    );

    Ok(())
}

/// Tests the sweep for a car that holds nothing.
///
/// Expected: zero rows touched
#[tokio::test]
async fn reports_zero_for_unparked_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;

    let freed = ParkingSpotRepository::new(db)
        .clear_car_everywhere(car.id)
        .await?;

    assert_eq!(freed, 0);

    Ok(())
}
