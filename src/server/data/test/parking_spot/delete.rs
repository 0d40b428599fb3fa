use super::*;

/// Tests deleting a spot row.
///
/// Expected: true, with the spot gone afterwards
#[tokio::test]
async fn deletes_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let repo = ParkingSpotRepository::new(db);

    assert!(repo.delete(spot.id).await?);
    assert!(repo.find_by_pk(spot.id).await?.is_none());

    Ok(())
}

/// Tests deleting a spot that does not exist.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_unknown_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ParkingSpotRepository::new(db).delete(9999).await?);

    Ok(())
}
