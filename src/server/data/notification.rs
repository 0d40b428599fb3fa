//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParam, Notification},
};

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new unread notification.
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let entity = entity::prelude::Notification::insert(entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            related_model: ActiveValue::Set(param.related_model),
            related_id: ActiveValue::Set(param.related_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Lists one user's notifications, unread first, newest within each group.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_asc(entity::notification::Column::IsRead)
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Notification::from_entity).collect()
    }

    /// Marks one of a user's notifications as read.
    ///
    /// The user filter keeps users from marking each other's notifications.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification found and marked
    /// - `Ok(false)` - No such notification for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
