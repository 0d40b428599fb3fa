//! Notification service.

use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationDto,
    server::{data::notification::NotificationRepository, error::AppError, middleware::auth::AuthUser},
};

/// Service for listing and acknowledging a user's notifications.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's notifications, unread first.
    pub async fn list_own(&self, actor: &AuthUser) -> Result<Vec<NotificationDto>, AppError> {
        let notifications = NotificationRepository::new(self.db)
            .list_for_user(actor.user.id)
            .await?;

        Ok(notifications.into_iter().map(|n| n.into_dto()).collect())
    }

    /// Marks one of the caller's notifications as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked
    /// - `Err(AppError::NotFound)` - No such notification for this caller
    pub async fn mark_read(&self, id: i32, actor: &AuthUser) -> Result<(), AppError> {
        let marked = NotificationRepository::new(self.db)
            .mark_read(id, actor.user.id)
            .await?;

        if !marked {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }
}
