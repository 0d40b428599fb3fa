use super::*;

/// Tests adding a spot to a lot.
///
/// Expected: spot stored free with its type and position
#[tokio::test]
async fn creates_free_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::create_lot(db).await?;

    let repo = ParkingSpotRepository::new(db);
    let spot = repo
        .create(
            lot.id,
            CreateSpotParam {
                spot_id: "A-01".to_string(),
                x: 10.0,
                y: 20.0,
                width: 40.0,
                height: 80.0,
                spot_type: SpotType::Electric,
                label: Some("Charger".to_string()),
                is_active: true,
            },
        )
        .await?;

    assert_eq!(spot.parking_lot_id, lot.id);
    assert_eq!(spot.spot_id, "A-01");
    assert_eq!(spot.spot_type, SpotType::Electric);
    assert!(!spot.is_occupied());
    assert!(repo.spot_exists(lot.id, "A-01").await?);
    assert!(!repo.spot_exists(lot.id, "A-02").await?);

    Ok(())
}

/// Tests that spot identifiers are scoped to their lot.
///
/// Expected: same identifier usable in a different lot
#[tokio::test]
async fn scopes_spot_ids_to_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_lot(db).await?;
    let second = factory::create_lot(db).await?;
    factory::parking_spot::ParkingSpotFactory::new(db, first.id)
        .spot_id("A-01")
        .build()
        .await?;

    let repo = ParkingSpotRepository::new(db);

    assert!(repo.spot_exists(first.id, "A-01").await?);
    assert!(!repo.spot_exists(second.id, "A-01").await?);

    let found = repo.find(first.id, "A-01").await?;
    assert!(found.is_some());
    assert!(repo.find(second.id, "A-01").await?.is_none());

    Ok(())
}
