use std::collections::HashSet;

use crate::events::{now_rfc3339, EventSink, FeedEvent};
use crate::models::{Notification, NotificationState};

/// Number of unread entries in a feed
pub fn unread_count(feed: &[Notification]) -> usize {
    feed.iter().filter(|n| !n.read).count()
}

/// Mark one entry read. Returns false if the id is absent or already read.
pub fn mark_read(feed: &mut [Notification], id: &str) -> bool {
    match feed.iter_mut().find(|n| n.id == id) {
        Some(notification) if !notification.read => {
            notification.read = true;
            true
        }
        _ => false,
    }
}

/// Mark every entry read. Returns how many entries changed.
pub fn mark_all_read(feed: &mut [Notification]) -> usize {
    let mut marked = 0;
    for notification in feed.iter_mut().filter(|n| !n.read) {
        notification.read = true;
        marked += 1;
    }
    marked
}

/// Remove the entry with `id`, if present
pub fn delete(feed: &mut Vec<Notification>, id: &str) -> Option<Notification> {
    let index = feed.iter().position(|n| n.id == id)?;
    Some(feed.remove(index))
}

/// Owns one actor's notification feed for the lifetime of a session.
///
/// The feed is seeded once and can only shrink or move entries from unread to
/// read. Every mutation that changes state is published when an event sink is
/// attached.
pub struct NotificationStore {
    notifications: Vec<Notification>,
    deleted: HashSet<String>,
    events: Option<EventSink>,
}

impl NotificationStore {
    /// Seed a store. Later entries reusing an earlier id are dropped.
    pub fn new(seed: Vec<Notification>) -> Self {
        let mut seen = HashSet::new();
        let mut notifications = Vec::with_capacity(seed.len());

        for notification in seed {
            if seen.insert(notification.id.clone()) {
                notifications.push(notification);
            } else {
                tracing::warn!(
                    "Dropping duplicate notification id {} from seed feed",
                    notification.id
                );
            }
        }

        Self {
            notifications,
            deleted: HashSet::new(),
            events: None,
        }
    }

    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = Some(events);
        self
    }

    /// Entries in display order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.notifications)
    }

    /// `None` for ids this feed never contained
    pub fn state_of(&self, id: &str) -> Option<NotificationState> {
        if self.deleted.contains(id) {
            return Some(NotificationState::Deleted);
        }
        self.get(id).map(Notification::state)
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        if !mark_read(&mut self.notifications, id) {
            tracing::debug!("mark_read ignored for notification {}", id);
            return false;
        }

        let unread_count = self.unread_count();
        tracing::debug!("Notification {} marked read, {} unread", id, unread_count);

        if let Some(events) = &self.events {
            events.publish(FeedEvent::NotificationRead {
                session_id: events.session_id().to_string(),
                notification_id: id.to_string(),
                unread_count,
                timestamp: now_rfc3339(),
            });
        }
        true
    }

    pub fn mark_all_read(&mut self) -> usize {
        let marked = mark_all_read(&mut self.notifications);
        if marked == 0 {
            return 0;
        }

        tracing::debug!("Marked {} notifications read", marked);

        if let Some(events) = &self.events {
            events.publish(FeedEvent::AllNotificationsRead {
                session_id: events.session_id().to_string(),
                marked,
                unread_count: self.unread_count(),
                timestamp: now_rfc3339(),
            });
        }
        marked
    }

    pub fn delete(&mut self, id: &str) -> Option<Notification> {
        let removed = delete(&mut self.notifications, id)?;
        self.deleted.insert(removed.id.clone());

        let unread_count = self.unread_count();
        tracing::debug!(
            "Notification {} deleted, {} remaining, {} unread",
            id,
            self.notifications.len(),
            unread_count
        );

        if let Some(events) = &self.events {
            events.publish(FeedEvent::NotificationDeleted {
                session_id: events.session_id().to_string(),
                notification_id: removed.id.clone(),
                remaining: self.notifications.len(),
                unread_count,
                timestamp: now_rfc3339(),
            });
        }
        Some(removed)
    }
}
