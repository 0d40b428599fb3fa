use super::*;

/// Tests the per-lot spot listing and its active-only filter.
///
/// Expected: spots ordered by identifier, inactive excluded on request
#[tokio::test]
async fn lists_spots_ordered_with_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::create_lot(db).await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("B-01")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("A-01")
        .build()
        .await?;
    factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .spot_id("C-01")
        .is_active(false)
        .build()
        .await?;

    let repo = ParkingSpotRepository::new(db);

    let all = repo.list_for_lot(lot.id, false).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].spot_id, "A-01");
    assert_eq!(all[1].spot_id, "B-01");

    let active = repo.list_for_lot(lot.id, true).await?;
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|s| s.is_active));

    Ok(())
}
