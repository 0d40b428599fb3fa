use super::*;

/// Tests creating a lot.
///
/// Expected: lot stored active with no spots
#[tokio::test]
async fn creates_active_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingLotRepository::new(db);
    let lot = repo
        .create(CreateParkingLotParam {
            lot_id: "P1".to_string(),
            name: "North deck".to_string(),
            description: None,
            svg_path: None,
            price: 75.0,
            width: 800,
            height: 600,
        })
        .await?;

    assert_eq!(lot.lot_id, "P1");
    assert!(lot.is_active);
    assert!(lot.spots.is_empty());
    assert!(repo.lot_id_exists("P1").await?);
    assert!(!repo.lot_id_exists("P2").await?);

    Ok(())
}
