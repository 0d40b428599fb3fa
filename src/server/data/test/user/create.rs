use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository inserts the account as active with the
/// provided fields.
///
/// Expected: Ok with active user created
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "resident1".to_string(),
            full_name: "Resident One".to_string(),
            email: "resident1@example.com".to_string(),
            password_hash: "hashed".to_string(),
            phone_number: Some("555-0100".to_string()),
            address: None,
            apartment_number: Some("4A".to_string()),
        })
        .await?;

    assert_eq!(user.username, "resident1");
    assert_eq!(user.apartment_number.as_deref(), Some("4A"));
    assert!(user.is_active);

    let stored = repo.find_by_id(user.id).await?;
    assert!(stored.is_some());

    Ok(())
}
