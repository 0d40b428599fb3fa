use super::*;

/// Tests the per-user request listing.
///
/// Expected: only the user's own requests returned
#[tokio::test]
async fn scopes_listing_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let other_car = factory::create_car(db, other.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let repo = ParkingRequestRepository::new(db);
    let mine = repo
        .create(request_param(user.id, car.id, spot.id), false)
        .await?;
    repo.create(request_param(other.id, other_car.id, spot.id), false)
        .await?;

    let own = repo.list_for_user(user.id).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, mine.id);

    let all = repo.list_all().await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
