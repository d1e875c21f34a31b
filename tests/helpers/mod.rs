#![allow(dead_code)]
use placement_portal::models::{Notification, NotificationCategory, NotificationKind};
use placement_portal::services::{select_feed, NotificationStore};

/// Store seeded exactly as a session for `role` would be
pub fn seeded_store(role: &str) -> NotificationStore {
    NotificationStore::new(select_feed(role))
}

/// Ids in display order
pub fn ids(store: &NotificationStore) -> Vec<String> {
    store.notifications().iter().map(|n| n.id.clone()).collect()
}

/// Count unread entries by scanning the feed directly
pub fn recount_unread(store: &NotificationStore) -> usize {
    store.notifications().iter().filter(|n| !n.read).count()
}

pub fn create_test_notification(id: &str, read: bool) -> Notification {
    let notification = Notification::new(
        id,
        NotificationKind::Info,
        NotificationCategory::Message,
        format!("Notification {}", id),
        "Test message",
        "just now",
    );
    if read {
        notification.already_read()
    } else {
        notification
    }
}
