use super::*;

/// Tests propagating an owner snapshot change across the owner's cars.
///
/// Expected: every car of the owner updated, other owners untouched
#[tokio::test]
async fn updates_all_cars_of_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_car(db, owner.id).await?;
    let second = factory::create_car(db, owner.id).await?;
    let foreign = factory::create_car(db, other.id).await?;

    let repo = CarRepository::new(db);
    repo.propagate_owner_snapshot(owner.id, None, Some("0612345678"), Some("7C"))
        .await?;

    let first = repo.find_by_id(first.id).await?.unwrap();
    let second = repo.find_by_id(second.id).await?.unwrap();
    let foreign = repo.find_by_id(foreign.id).await?.unwrap();

    assert_eq!(first.owner_contact.as_deref(), Some("0612345678"));
    assert_eq!(first.owner_apartment.as_deref(), Some("7C"));
    assert!(first.owner_name.is_none());
    assert_eq!(second.owner_contact.as_deref(), Some("0612345678"));
    assert!(foreign.owner_contact.is_none());

    Ok(())
}
