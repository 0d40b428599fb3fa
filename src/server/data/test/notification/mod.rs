use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParam, NotificationKind},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_for_user;
mod mark_read;

/// A system notification addressed to the given user.
fn notification_param(user_id: i32, title: &str) -> CreateNotificationParam {
    CreateNotificationParam {
        user_id,
        title: title.to_string(),
        message: format!("{title} body"),
        kind: NotificationKind::System,
        related_model: None,
        related_id: None,
    }
}
