use super::*;

/// Tests creating a group with permission rows.
///
/// Verifies that the group and its grants are persisted and returned
/// together.
///
/// Expected: Ok with group and grants created
#[tokio::test]
async fn creates_group_with_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGroupRepository::new(db);
    let group = repo
        .create(CreateUserGroupParam {
            name: "Staff".to_string(),
            description: Some("Building staff".to_string()),
            permissions: vec![
                PermissionGrant::full(Resource::Car),
                PermissionGrant {
                    resource: Resource::User,
                    actions: [Action::Read].into_iter().collect(),
                },
            ],
        })
        .await?;

    assert_eq!(group.name, "Staff");
    assert!(group.is_active);
    assert_eq!(group.permissions.len(), 2);

    let stored = repo.find_by_id(group.id).await?.unwrap();
    assert_eq!(stored.permissions.len(), 2);

    Ok(())
}

/// Tests creating a group without any grants.
///
/// Expected: Ok with an empty permission list
#[tokio::test]
async fn creates_group_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = UserGroupRepository::new(db)
        .create(CreateUserGroupParam {
            name: "Residents".to_string(),
            description: None,
            permissions: Vec::new(),
        })
        .await?;

    assert!(group.permissions.is_empty());

    Ok(())
}
