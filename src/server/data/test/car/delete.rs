use super::*;

/// Tests deleting a car row.
///
/// Expected: true, with the car gone afterwards
#[tokio::test]
async fn deletes_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;

    let repo = CarRepository::new(db);

    assert!(repo.delete(car.id).await?);
    assert!(repo.find_by_id(car.id).await?.is_none());

    Ok(())
}

/// Tests deleting a car that does not exist.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_unknown_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CarRepository::new(db).delete(9999).await?);

    Ok(())
}
