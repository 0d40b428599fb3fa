//! Notification domain models.

use chrono::{DateTime, Utc};

use crate::{model::notification::NotificationDto, server::error::AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    PaymentReminder,
    RequestStatus,
    SpotAvailable,
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::PaymentReminder => "payment_reminder",
            NotificationKind::RequestStatus => "request_status",
            NotificationKind::SpotAvailable => "spot_available",
            NotificationKind::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "payment_reminder" => Some(NotificationKind::PaymentReminder),
            "request_status" => Some(NotificationKind::RequestStatus),
            "spot_available" => Some(NotificationKind::SpotAvailable),
            "system" => Some(NotificationKind::System),
            _ => None,
        }
    }
}

/// A message delivered to one user, optionally tied to a related record.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub related_model: Option<String>,
    pub related_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        let kind = NotificationKind::parse(&entity.kind).ok_or_else(|| {
            AppError::InternalError(format!("Unknown stored notification kind: {}", entity.kind))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            kind,
            related_model: entity.related_model,
            related_id: entity.related_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            kind: self.kind.as_str().to_string(),
            related_model: self.related_model,
            related_id: self.related_id,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for delivering a notification to a user.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub related_model: Option<String>,
    pub related_id: Option<i32>,
}
