//! Notification List
//!
//! Newest first. Records are only ever marked read, never unread.

use chrono::Utc;

use crate::domain::{new_id, DomainError, DomainResult, NewNotification, Notification};
use super::traits::Repository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationList {
    notifications: Vec<Notification>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Insert at the front with a fresh id, the current date and `read = false`
    pub fn add(&mut self, new: NewNotification) -> Notification {
        let notification = new.into_notification(new_id(), Utc::now());
        log::debug!("[NOTIFY] add {} ({})", notification.id, notification.kind.as_str());
        self.notifications.insert(0, notification.clone());
        notification
    }

    /// Set the read flag of one notification; already-read stays read
    pub fn mark_read(&mut self, id: &str) -> DomainResult<()> {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                Ok(())
            }
            None => {
                log::warn!("[NOTIFY] mark_read: no notification {}", id);
                Err(DomainError::NotFound(format!("notification {}", id)))
            }
        }
    }

    pub fn clear(&mut self) {
        log::debug!("[NOTIFY] clear {} notifications", self.notifications.len());
        self.notifications.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Repository<Notification> for NotificationList {
    type Draft = NewNotification;

    fn create(&mut self, draft: NewNotification) -> Notification {
        self.add(draft)
    }

    fn find_by_id(&self, id: &String) -> Option<&Notification> {
        self.notifications.iter().find(|n| &n.id == id)
    }

    fn list(&self) -> &[Notification] {
        &self.notifications
    }

    fn delete(&mut self, id: &String) -> DomainResult<Notification> {
        let index = self
            .notifications
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("notification {}", id)))?;
        Ok(self.notifications.remove(index))
    }
}
