use super::*;

/// Tests that permission resolution input only includes active groups.
///
/// Verifies that deactivated groups are excluded from a user's group list
/// even while the membership row remains.
///
/// Expected: only active memberships returned, with grants attached
#[tokio::test]
async fn excludes_inactive_groups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let active = factory::create_group(db).await?;
    let inactive = factory::user_group::UserGroupFactory::new(db)
        .is_active(false)
        .build()
        .await?;
    factory::grant_permission(db, active.id, "car", (true, true, false, false)).await?;
    factory::add_member(db, user.id, active.id).await?;
    factory::add_member(db, user.id, inactive.id).await?;

    let groups = UserGroupRepository::new(db)
        .active_groups_for_user(user.id)
        .await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, active.id);
    assert_eq!(groups[0].permissions.len(), 1);

    Ok(())
}

/// Tests a user with no memberships.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_for_no_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let groups = UserGroupRepository::new(db)
        .active_groups_for_user(user.id)
        .await?;

    assert!(groups.is_empty());

    Ok(())
}
