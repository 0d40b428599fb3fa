use super::*;

/// Tests adding and removing a group member.
///
/// Expected: membership reflects each operation
#[tokio::test]
async fn adds_and_removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = UserGroupRepository::new(db);

    assert!(!repo.is_member(user.id, group.id).await?);

    repo.add_member(user.id, group.id).await?;
    assert!(repo.is_member(user.id, group.id).await?);

    repo.remove_member(user.id, group.id).await?;
    assert!(!repo.is_member(user.id, group.id).await?);

    Ok(())
}

/// Tests listing the users of a group.
///
/// Expected: only members are returned
#[tokio::test]
async fn lists_users_in_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::add_member(db, member.id, group.id).await?;

    let users = UserGroupRepository::new(db).users_in_group(group.id).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, member.id);
    assert!(users.iter().all(|u| u.id != outsider.id));

    Ok(())
}
