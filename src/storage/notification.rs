use chrono::Utc;

use super::{Store, StoreError};
use crate::models::{NewNotification, Notification};

impl Store {
    /// 某用户的全部通知，最新的在前
    pub fn notifications_for_user(&self, user_id: i64) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .map(|n| n.value().clone())
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        notifications
    }

    pub fn create_notification(&self, new: NewNotification) -> Result<Notification, StoreError> {
        let notification = Notification {
            id: self.notification_ids.next()?,
            user_id: new.user_id,
            kind: new.kind,
            message: new.message,
            read: new.read,
            created_at: Utc::now(),
            action_label: new.action_label,
            action_url: new.action_url,
        };
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(notification)
    }

    /// 标记已读；已读的通知再次标记不报错
    pub fn mark_notification_read(&self, id: i64) -> Option<Notification> {
        let mut notification = self.notifications.get_mut(&id)?;
        notification.read = true;
        Some(notification.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(user_id: i64, message: &str) -> NewNotification {
        NewNotification {
            user_id,
            kind: "ALERT".into(),
            message: message.into(),
            read: false,
            action_label: None,
            action_url: None,
        }
    }

    #[test]
    fn lists_only_the_users_notifications_newest_first() {
        let store = Store::new();
        store.create_notification(alert(1, "first")).unwrap();
        store.create_notification(alert(2, "other user")).unwrap();
        store.create_notification(alert(1, "second")).unwrap();

        let messages: Vec<String> = store
            .notifications_for_user(1)
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert!(store.notifications_for_user(3).is_empty());
    }

    #[test]
    fn mark_read_is_idempotent() {
        let store = Store::new();
        let created = store.create_notification(alert(1, "hi")).unwrap();
        assert!(!created.read);

        assert!(store.mark_notification_read(created.id).unwrap().read);
        assert!(store.mark_notification_read(created.id).unwrap().read);
        assert!(store.mark_notification_read(created.id + 1).is_none());
    }
}
