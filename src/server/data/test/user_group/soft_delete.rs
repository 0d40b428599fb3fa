use super::*;

/// Tests soft deletion of a group.
///
/// Verifies that the row survives with its active flag cleared and that
/// memberships are untouched.
///
/// Expected: true, with the group inactive afterwards
#[tokio::test]
async fn deactivates_without_deleting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::add_member(db, user.id, group.id).await?;

    let repo = UserGroupRepository::new(db);
    assert!(repo.soft_delete(group.id).await?);

    let stored = repo.find_by_id(group.id).await?.unwrap();
    assert!(!stored.is_active);
    assert!(repo.is_member(user.id, group.id).await?);

    Ok(())
}

/// Tests soft deleting a group that does not exist.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserGroupRepository::new(db).soft_delete(9999).await?);

    Ok(())
}
