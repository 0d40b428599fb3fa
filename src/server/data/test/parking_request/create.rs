use super::*;

/// Tests filing a request for a free spot.
///
/// Expected: request stored pending and not waiting
#[tokio::test]
async fn creates_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let request = ParkingRequestRepository::new(db)
        .create(request_param(user.id, car.id, spot.id), false)
        .await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert!(!request.is_waiting);
    assert!(request.approved_by.is_none());
    assert!(request.approval_date.is_none());

    Ok(())
}

/// Tests filing a request for an occupied spot.
///
/// Expected: request flagged as waiting
#[tokio::test]
async fn flags_waiting_for_occupied_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let request = ParkingRequestRepository::new(db)
        .create(request_param(user.id, car.id, spot.id), true)
        .await?;

    assert!(request.is_waiting);

    Ok(())
}
