use super::*;

/// Tests marking a notification as read.
///
/// Expected: true, with the flag persisted
#[tokio::test]
async fn marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(notification_param(user.id, "Reminder")).await?;

    assert!(repo.mark_read(notification.id, user.id).await?);

    let inbox = repo.list_for_user(user.id).await?;
    assert!(inbox[0].is_read);

    Ok(())
}

/// Tests that a user cannot mark another user's notification.
///
/// Expected: false, with the notification left unread
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(notification_param(owner.id, "Private")).await?;

    assert!(!repo.mark_read(notification.id, intruder.id).await?);

    let inbox = repo.list_for_user(owner.id).await?;
    assert!(!inbox[0].is_read);

    Ok(())
}
