use super::*;

/// Tests the partial lot update.
///
/// Expected: provided fields changed, business key and flag untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .price(50.0)
        .build()
        .await?;

    let updated = ParkingLotRepository::new(db)
        .update(
            lot.id,
            UpdateParkingLotParam {
                name: Some("East deck".to_string()),
                price: Some(90.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "East deck");
    assert_eq!(updated.price, 90.0);
    assert_eq!(updated.lot_id, "P1");
    assert!(updated.is_active);

    Ok(())
}

/// Tests updating a lot that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ParkingLotRepository::new(db)
        .update(9999, UpdateParkingLotParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
