use super::*;

/// Tests the partial car update.
///
/// Expected: provided fields changed, omitted fields preserved
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::car::CarFactory::new(db, user.id)
        .color("red")
        .model("Corolla")
        .build()
        .await?;

    let updated = CarRepository::new(db)
        .update(
            car.id,
            UpdateCarParam {
                color: Some("blue".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.color.as_deref(), Some("blue"));
    assert_eq!(updated.model.as_deref(), Some("Corolla"));
    assert_eq!(updated.license_plate, car.license_plate);

    Ok(())
}

/// Tests updating a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarRepository::new(db)
        .update(9999, UpdateCarParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
