use super::*;

/// Tests the inbox ordering: unread before read.
///
/// Expected: unread notifications listed first
#[tokio::test]
async fn lists_unread_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let read = repo.create(notification_param(user.id, "First")).await?;
    repo.mark_read(read.id, user.id).await?;
    let unread = repo.create(notification_param(user.id, "Second")).await?;

    let inbox = repo.list_for_user(user.id).await?;

    assert_eq!(inbox.len(), 2);
    assert_eq!(inbox[0].id, unread.id);
    assert!(!inbox[0].is_read);
    assert_eq!(inbox[1].id, read.id);
    assert!(inbox[1].is_read);

    Ok(())
}

/// Tests that the inbox only contains the user's own notifications.
///
/// Expected: other users' notifications absent
#[tokio::test]
async fn scopes_inbox_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create(notification_param(user.id, "Mine")).await?;
    repo.create(notification_param(other.id, "Theirs")).await?;

    let inbox = repo.list_for_user(user.id).await?;

    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].title, "Mine");

    Ok(())
}
