use super::*;

/// Tests toggling a lot's active flag.
///
/// Expected: flag persisted both ways
#[tokio::test]
async fn toggles_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::create_lot(db).await?;

    let repo = ParkingLotRepository::new(db);

    let disabled = repo.set_active(lot.id, false).await?.unwrap();
    assert!(!disabled.is_active);

    let enabled = repo.set_active(lot.id, true).await?.unwrap();
    assert!(enabled.is_active);

    Ok(())
}

/// Tests toggling a lot that does not exist.
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

    let result = ParkingLotRepository::new(db).set_active(9999, true).await?;

    assert!(result.is_none());

    Ok(())
}
