//! Notification Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// What triggered the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Match,
    Claim,
    Success,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Match => "match",
            NotificationKind::Claim => "claim",
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Match => "🎯",
            NotificationKind::Claim => "✅",
            NotificationKind::Success => "🎉",
            NotificationKind::Info => "ℹ️",
        }
    }
}

/// A message shown on the profile page.
///
/// `read` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

impl Entity for Notification {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Notification content before id and date are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl NewNotification {
    pub(crate) fn into_notification(self, id: String, now: DateTime<Utc>) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            date: now,
            read: false,
        }
    }
}
