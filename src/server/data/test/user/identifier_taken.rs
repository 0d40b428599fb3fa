use super::*;

/// Tests uniqueness checking across username and email.
///
/// Expected: true when either identifier collides, false otherwise
#[tokio::test]
async fn detects_username_and_email_collisions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("resident1")
        .email("resident1@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.identifier_taken("resident1", "other@example.com").await?);
    assert!(repo.identifier_taken("other", "resident1@example.com").await?);
    assert!(!repo.identifier_taken("other", "other@example.com").await?);

    Ok(())
}
