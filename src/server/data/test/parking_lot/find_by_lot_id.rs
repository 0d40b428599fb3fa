use super::*;

/// Tests looking up a lot by business key with its spot collection.
///
/// Expected: lot found with spots ordered by identifier
#[tokio::test]
async fn loads_lot_with_spots() -> Result<(), AppError> {
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
        .spot_id("B-01")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;

    let loaded = ParkingLotRepository::new(db)
        .find_by_lot_id("P1")
        .await?
        .unwrap();

    assert_eq!(loaded.id, lot.id);
    assert_eq!(loaded.spots.len(), 2);
    assert_eq!(loaded.spots[0].spot_id, "A-01");
    assert_eq!(loaded.spots[1].spot_id, "B-01");

    Ok(())
}

/// Tests looking up an unknown business key.
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

    let found = ParkingLotRepository::new(db).find_by_lot_id("P9").await?;

    assert!(found.is_none());

    Ok(())
}
