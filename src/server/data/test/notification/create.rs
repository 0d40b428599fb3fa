use super::*;

/// Tests delivering a notification.
///
/// Expected: stored unread with its related-record reference
#[tokio::test]
async fn creates_unread_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParam {
            user_id: user.id,
            title: "Parking request approved".to_string(),
            message: "Your request for spot A-01 was approved".to_string(),
            kind: NotificationKind::RequestStatus,
            related_model: Some("parking_request".to_string()),
            related_id: Some(12),
        })
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.kind, NotificationKind::RequestStatus);
    assert_eq!(notification.related_model.as_deref(), Some("parking_request"));
    assert_eq!(notification.related_id, Some(12));
    assert!(!notification.is_read);

    Ok(())
}
