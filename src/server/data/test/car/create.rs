use super::*;

/// Tests registering a car with its owner snapshot.
///
/// Expected: car stored unparked with the snapshot fields set
#[tokio::test]
async fn creates_car_with_owner_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let car = CarRepository::new(db)
        .create(CreateCarParam {
            license_plate: "AB-123-CD".to_string(),
            color: Some("red".to_string()),
            model: Some("Corolla".to_string()),
            owner_user_id: user.id,
            owner_name: Some(user.full_name.clone()),
            owner_contact: Some(user.email.clone()),
            owner_apartment: Some("12B".to_string()),
        })
        .await?;

    assert_eq!(car.license_plate, "AB-123-CD");
    assert_eq!(car.owner_user_id, user.id);
    assert_eq!(car.owner_apartment.as_deref(), Some("12B"));
    assert!(!car.is_parked());

    Ok(())
}

/// Tests plate existence and lookup by plate.
///
/// Expected: registered plate found, unknown plate absent
#[tokio::test]
async fn finds_car_by_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::car::CarFactory::new(db, user.id)
        .license_plate("XYZ789")
        .build()
        .await?;

    let repo = CarRepository::new(db);

    assert!(repo.plate_exists("XYZ789").await?);
    assert!(!repo.plate_exists("NOPE000").await?);

    let found = repo.find_by_plate("XYZ789").await?.unwrap();
    assert_eq!(found.id, car.id);
    assert!(repo.find_by_plate("NOPE000").await?.is_none());

    Ok(())
}

/// Tests that owner-scoped listing excludes other residents' cars.
///
/// Expected: only the owner's cars returned
#[tokio::test]
async fn lists_cars_by_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_car(db, owner.id).await?;
    factory::create_car(db, other.id).await?;

    let cars = CarRepository::new(db).list_by_owner(owner.id).await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, mine.id);

    Ok(())
}
