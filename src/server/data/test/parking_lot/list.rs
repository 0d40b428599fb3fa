use super::*;

/// Tests the active-only listing filter.
///
/// Expected: inactive lots excluded when requested, included otherwise
#[tokio::test]
async fn filters_inactive_lots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P2")
        .is_active(false)
        .build()
        .await?;

    let repo = ParkingLotRepository::new(db);

    let active = repo.list(true).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].lot_id, "P1");

    let all = repo.list(false).await?;
    assert_eq!(all.len(), 2);

    assert_eq!(repo.count_active().await?, 1);

    Ok(())
}

/// Tests that the listing attaches each lot's own spots.
///
/// Expected: spots grouped under their lot
#[tokio::test]
async fn groups_spots_by_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P1")
        .build()
        .await?;
    let second = factory::parking_lot::ParkingLotFactory::new(db)
        .lot_id("P2")
        .build()
        .await?;
    factory::create_spot(db, first.id).await?;
    factory::create_spot(db, first.id).await?;
    factory::create_spot(db, second.id).await?;

    let lots = ParkingLotRepository::new(db).list(false).await?;

    assert_eq!(lots[0].spots.len(), 2);
    assert_eq!(lots[1].spots.len(), 1);

    Ok(())
}
