use super::*;

/// Tests writing a new apartment number back to the account.
///
/// Expected: Ok with the account updated
#[tokio::test]
async fn updates_apartment_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_apartment_number(user.id, "12B").await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.apartment_number.as_deref(), Some("12B"));

    Ok(())
}
