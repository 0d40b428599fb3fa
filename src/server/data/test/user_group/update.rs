use super::*;

/// Tests the wholesale permission replacement on update.
///
/// Verifies that passing a permission list replaces every existing grant
/// rather than merging with them.
///
/// Expected: Ok with only the new grants remaining
#[tokio::test]
async fn replaces_permissions_wholesale() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGroupRepository::new(db);
    let group = repo
        .create(CreateUserGroupParam {
            name: "Staff".to_string(),
            description: None,
            permissions: vec![
                PermissionGrant::full(Resource::Car),
                PermissionGrant::full(Resource::ParkingLot),
            ],
        })
        .await?;

    let updated = repo
        .update(
            group.id,
            UpdateUserGroupParam {
                name: None,
                description: None,
                permissions: Some(vec![PermissionGrant {
                    resource: Resource::Payment,
                    actions: [Action::Read].into_iter().collect(),
                }]),
                is_active: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.permissions.len(), 1);
    assert_eq!(updated.permissions[0].resource, Resource::Payment);

    Ok(())
}

/// Tests that omitting the permission list keeps existing grants.
///
/// Expected: Ok with grants untouched
#[tokio::test]
async fn keeps_permissions_when_not_provided() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGroupRepository::new(db);
    let group = repo
        .create(CreateUserGroupParam {
            name: "Staff".to_string(),
            description: None,
            permissions: vec![PermissionGrant::full(Resource::Car)],
        })
        .await?;

    let updated = repo
        .update(
            group.id,
            UpdateUserGroupParam {
                name: Some("Building staff".to_string()),
                description: None,
                permissions: None,
                is_active: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Building staff");
    assert_eq!(updated.permissions.len(), 1);

    Ok(())
}

/// Tests updating a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserGroupRepository::new(db)
        .update(9999, UpdateUserGroupParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
