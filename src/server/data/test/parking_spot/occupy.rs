use super::*;

/// Tests the spot-side occupancy writes.
///
/// Expected: occupant set on occupy, cleared on vacate
#[tokio::test]
async fn occupies_and_vacates_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let repo = ParkingSpotRepository::new(db);

    repo.occupy(spot.id, car.id, Some("red")).await?;
    let occupied = repo.find_by_pk(spot.id).await?.unwrap();
    assert_eq!(occupied.current_car_id, Some(car.id));
    assert_eq!(occupied.current_car_color.as_deref(), Some("red"));
    assert!(occupied.is_occupied());

    repo.vacate(spot.id).await?;
    let freed = repo.find_by_pk(spot.id).await?.unwrap();
    assert!(!freed.is_occupied());
    assert!(freed.current_car_color.is_none());

    Ok(())
}
