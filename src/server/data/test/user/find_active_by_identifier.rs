use super::*;

/// Tests looking up an account by username.
///
/// Expected: Ok with the matching user
#[tokio::test]
async fn finds_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("resident1")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_active_by_identifier("resident1")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up an account by email through the same identifier field.
///
/// Expected: Ok with the matching user
#[tokio::test]
async fn finds_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("resident1@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_active_by_identifier("resident1@example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that deactivated accounts are not returned.
///
/// Expected: Ok(None) for an inactive account
#[tokio::test]
async fn skips_inactive_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("deactivated")
        .is_active(false)
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_active_by_identifier("deactivated")
        .await?;

    assert!(found.is_none());

    Ok(())
}
