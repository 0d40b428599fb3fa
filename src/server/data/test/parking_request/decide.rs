use super::*;

/// Tests recording a staff decision.
///
/// Expected: status, decider, decision date, and notes stamped
#[tokio::test]
async fn records_decision() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let staff = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let repo = ParkingRequestRepository::new(db);
    let request = repo
        .create(request_param(user.id, car.id, spot.id), false)
        .await?;

    let decided_at = Utc::now();
    let decided = repo
        .decide(
            request.id,
            RequestStatus::Approved,
            Some("Spot assigned".to_string()),
            staff.id,
            decided_at,
        )
        .await?
        .unwrap();

    assert_eq!(decided.status, RequestStatus::Approved);
    assert_eq!(decided.approved_by, Some(staff.id));
    assert_eq!(decided.approval_date, Some(decided_at));
    assert_eq!(decided.notes.as_deref(), Some("Spot assigned"));

    Ok(())
}

/// Tests that deciding without notes keeps the filed notes.
///
/// Expected: original notes preserved
#[tokio::test]
async fn keeps_notes_when_not_provided() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let staff = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let repo = ParkingRequestRepository::new(db);
    let mut param = request_param(user.id, car.id, spot.id);
    param.notes = Some("Near the elevator please".to_string());
    let request = repo.create(param, false).await?;

    let decided = repo
        .decide(request.id, RequestStatus::Rejected, None, staff.id, Utc::now())
        .await?
        .unwrap();

    assert_eq!(decided.status, RequestStatus::Rejected);
    assert_eq!(decided.notes.as_deref(), Some("Near the elevator please"));

    Ok(())
}

/// Tests deciding a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ParkingRequestRepository::new(db)
        .decide(9999, RequestStatus::Approved, None, 1, Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}
