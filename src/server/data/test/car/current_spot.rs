use super::*;

/// Tests setting and clearing a car's current-spot pointer.
///
/// Expected: pointer pair set after parking, cleared after leaving
#[tokio::test]
async fn sets_and_clears_pointer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;

    let repo = CarRepository::new(db);

    repo.set_current_spot(car.id, "P1", "A-01").await?;
    let parked = repo.find_by_id(car.id).await?.unwrap();
    let spot = parked.current_spot.as_ref().unwrap();
    assert_eq!(spot.lot_id, "P1");
    assert_eq!(spot.spot_id, "A-01");

    repo.clear_current_spot(car.id).await?;
    let freed = repo.find_by_id(car.id).await?.unwrap();
    assert!(!freed.is_parked());

    Ok(())
}
